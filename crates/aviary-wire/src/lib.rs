//! Protobuf wire contract for the Aviary platform API.
//!
//! The platform exposes the same data model over two transports: the JSON
//! REST surface consumed by [`aviary_protocol`], and a protobuf surface
//! defined by the schemas under `proto/`. Message and field layout mirror
//! the JSON contract field for field, so the two stay interchangeable:
//!
//! ```text
//! aviary-protocol (serde/JSON)  <--[convert]-->  aviary-wire (prost)
//! ```
//!
//! The prost output is committed under `src/generated/` so the workspace
//! builds without `protoc`. After editing a schema, regenerate with
//! `prost-build` over `proto/*.proto` and commit the result alongside it.
//!
//! Open-ended maps (`model_config`, `parameters`, `metadata`, ...) ride as
//! `google.protobuf.Struct`; [`convert`] bridges them to
//! [`aviary_protocol::MetaMap`] and re-validates the string-typed enum
//! fields on the way in.

pub mod convert;

pub mod v1 {
    include!("generated/platform.v1.rs");
}

pub use convert::ConvertError;
