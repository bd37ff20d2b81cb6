pub use table::{load_table, ConfigConstants, ConfigElement, ConfigElementTable, LoadedTable};

mod table;
