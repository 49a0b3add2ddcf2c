//! # sf-codegen
//!
//! TypeScript declarations for Salesforce SObjects.
//!
//! ## Features
//!
//! - **Describe** - Fetch object and field metadata over the REST API
//! - **Emit** - One `export interface` per object, relationships typed when the
//!   related object is generated in the same run
//! - **Naming** - Optional conversion of api names (`Annual_Revenue__c` → `annualRevenue`),
//!   explicit class names and field mappings, excluded fields
//! - **Format** - Deterministic re-indentation of the concatenated output
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_auth::Session;
//! use busbar_sf_codegen::{DescribeGenerator, ObjectGenerator, PlanEntry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_codegen::Error> {
//!     let session = Session::new("https://myorg.my.salesforce.com", "access_token_here");
//!     let plan = vec![PlanEntry::new("Account"), PlanEntry::new("Contact")];
//!
//!     let generator = DescribeGenerator::new(session, &plan);
//!     for entry in &plan {
//!         print!("{}", generator.generate(entry).await?);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod describe;
mod error;
mod format;
mod generator;
mod naming;
mod options;
mod typescript;

pub use client::{is_safe_sobject_name, DescribeClient};
pub use describe::{ChildRelationship, DescribeSObjectResult, FieldDescribe};
pub use error::{Error, ErrorKind, Result};
pub use format::format_source;
pub use generator::{DescribeGenerator, ObjectGenerator};
pub use naming::{class_name, property_name};
pub use options::{FieldMapping, ObjectConfig, PlanEntry};
pub use typescript::{interface_name, known_types, render_interface, ts_type, KnownTypes};
