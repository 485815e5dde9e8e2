//! # HTTP Handlers
//!
//! All endpoints exposed by the catalog service.
//!
//! ## Handler Organization
//! ```text
//! handlers/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── items.rs    ◄─── Item list, detail, add and edit forms
//! └── health.rs   ◄─── Health check
//! ```
//!
//! ## How Form Submissions Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Item Flow                                        │
//! │                                                                         │
//! │  Browser                                                                │
//! │  ───────                                                                │
//! │  POST /items/add                                                        │
//! │  name=testC&price=30000&quantity=30                                     │
//! │         │                                                               │
//! │         │ (Form extractor → ItemForm → Item)                            │
//! │         ▼                                                               │
//! │  add_item(State<Arc<AppState>>, Form<ItemForm>)                         │
//! │         │                                                               │
//! │         │ state.store.insert(item) → id 3                               │
//! │         ▼                                                               │
//! │  303 See Other                                                          │
//! │  Location: /items/3?status=true                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  GET /items/3?status=true → detail page with "Saved." banner            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod health;
pub mod items;
