//! Client-side routing: route table, guard, navigation pipeline, titles.
//!
//! ARCHITECTURE
//! ============
//! `table` maps paths to pages and metadata, `guard` turns metadata plus the
//! session into an allow/redirect decision, `navigation` runs the ordered
//! hook pipeline and `title` picks the document title for a committed route.

pub mod guard;
pub mod navigation;
pub mod table;
pub mod title;
