pub mod core;
pub mod flow;

pub use self::core::EventSender;
pub use self::flow::FlowWorker;
