pub mod content_gateway;
pub mod notifier;
