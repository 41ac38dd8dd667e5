//! Hibernate/JPA generator for tabula.
//!
//! Per table it writes an entity class (`User.java`) and its static
//! metamodel (`User_.java`); per enum type a Java enum (`Status.java`) and the
//! Hibernate `UserType` that maps it (`StatusUserType.java`).

mod generator;
mod members;
mod naming;
mod type_mapper;

pub mod files;

pub use generator::{HibernateGenerator, HibernateOptions};
pub use members::{EntityMember, MetamodelAttribute, imports_for};
pub use naming::JAVA_NAMING;
pub use tabula_codegen::{GenerateResult, Generator, PreviewFile};
pub use type_mapper::HibernateTypeMapper;
