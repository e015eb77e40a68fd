pub mod content_store_adapter;
