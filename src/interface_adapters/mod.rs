// Interface adapters: the console presentation protocol and viewport sources.

pub mod console;
pub mod protocol;
pub mod viewport;
