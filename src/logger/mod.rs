pub mod change_logger;
