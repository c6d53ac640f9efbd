//! Immutable vertex meshes.
//!
//! A [`StaticMesh`] is a write-once GPU vertex buffer paired with the
//! [`VertexLayout`] describing how its bytes map to shader inputs. The
//! buffer and the layout are captured together at upload; callers never
//! sequence bind/upload/declare steps themselves, so the classic
//! mis-ordering of attribute state cannot be expressed.

mod layout;
mod primitive;
mod static_mesh;

pub use layout::{VertexAttribute, VertexFormat, VertexLayout};
pub use primitive::PrimitiveKind;
pub use static_mesh::StaticMesh;
