pub mod properties;

pub use properties::PropertyCommands;
