mod common;

mod content_store_adapter_tests;
mod property_tests;
mod selection_ledger_tests;
