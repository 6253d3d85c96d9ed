//! Knowledge base endpoints.

use aviary_protocol::{
    CreateKnowledgeBaseRequest, DeleteResponse, Document, KnowledgeBase, KnowledgeBaseListQuery,
    Page, UploadDocumentRequest,
};

use super::PlatformClient;
use crate::error::{ClientError, ClientResult};

impl PlatformClient {
    /// List knowledge bases, optionally filtered by type.
    pub async fn list_knowledge_bases(
        &self,
        query: &KnowledgeBaseListQuery,
    ) -> ClientResult<Page<KnowledgeBase>> {
        let response = self
            .authorize(self.client.get(self.url("/knowledge-bases")))
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Fetch one knowledge base by id.
    pub async fn get_knowledge_base(&self, id: &str) -> ClientResult<KnowledgeBase> {
        let response = self
            .authorize(self.client.get(self.url(&format!("/knowledge-bases/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("knowledge base", id))
    }

    /// Create a knowledge base. The embedding model defaults server-side
    /// when absent.
    pub async fn create_knowledge_base(
        &self,
        request: &CreateKnowledgeBaseRequest,
    ) -> ClientResult<KnowledgeBase> {
        if request.name.trim().is_empty() {
            return Err(ClientError::Validation(
                "knowledge base name is required".to_string(),
            ));
        }

        let response = self
            .authorize(self.client.post(self.url("/knowledge-bases")))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Upload a document into a knowledge base. The server chunks and
    /// embeds it asynchronously; the returned [`Document`] carries the
    /// processing status.
    pub async fn upload_document(
        &self,
        kb_id: &str,
        request: &UploadDocumentRequest,
    ) -> ClientResult<Document> {
        if request.title.trim().is_empty() {
            return Err(ClientError::Validation(
                "document title is required".to_string(),
            ));
        }
        if request.content.trim().is_empty() {
            return Err(ClientError::Validation(
                "document content is required".to_string(),
            ));
        }

        let response = self
            .authorize(
                self.client
                    .post(self.url(&format!("/knowledge-bases/{kb_id}/documents"))),
            )
            .json(request)
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("knowledge base", kb_id))
    }

    /// Delete a knowledge base and its documents.
    pub async fn delete_knowledge_base(&self, id: &str) -> ClientResult<DeleteResponse> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/knowledge-bases/{id}"))))
            .send()
            .await?;
        self.handle_response(response)
            .await
            .map_err(|e| e.or_not_found("knowledge base", id))
    }
}
