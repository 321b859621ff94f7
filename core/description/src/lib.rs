#![warn(clippy::pedantic)]
//! User data to description resource conversion.
//!
//! The pipeline has three stages:
//!
//! 1. [`builder::build`] turns the flat user data container into a
//!    [`builder::UserDataTree`] by following each parameter's parent group.
//! 2. [`symbols::SymbolMap`] walks the tree in pre-order and assigns every
//!    parameter a unique symbol and an integer id.
//! 3. [`render`] emits the enumeration header, the description grammar and
//!    the string table from the allocated tree.
//!
//! ```
//! use protoconv_description::attributes::AttributeBag;
//! use protoconv_description::builder::build;
//! use protoconv_description::descid::DescId;
//! use protoconv_description::dtype::DataType;
//! use protoconv_description::symbols::allocate_all;
//!
//! let attributes = AttributeBag {
//!     name: Some("Radius".into()),
//!     parent_group: DescId::main_group(),
//!     ..AttributeBag::default()
//! };
//! let mut tree = build(vec![(DescId::user_data(1, DataType::Real), attributes)]).unwrap();
//! let symbols = allocate_all(&mut tree, "MY_");
//! assert_eq!(symbols.symbols(), &[("MY_RADIUS".to_string(), 1000)]);
//! ```

pub mod attributes;
pub mod builder;
pub mod descid;
pub mod dtype;
pub mod errors;
pub mod naming;
pub mod node;
pub mod render;
pub mod source;
pub mod symbols;
