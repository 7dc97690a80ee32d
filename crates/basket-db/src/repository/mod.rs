//! # Repository Module
//!
//! SQLite repository implementations.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BasketService (basket-api)                                             │
//! │       │                                                                 │
//! │       │  store.save(new_basket) / store.find_by_id(id)                  │
//! │       ▼                                                                 │
//! │  dyn BasketStore                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BasketRepository                                                       │
//! │  ├── save(&self, basket)      one transaction                           │
//! │  ├── find_by_id(&self, id)    basket row + ordered item rows            │
//! │  └── count(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod basket;
