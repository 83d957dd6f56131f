/// Environment variable naming the DynamoDB items table
pub const ITEMS_TABLE_NAME: &'static str = "ITEMS_TABLE_NAME";
/// Table used when no environment override is present
pub const DEFAULT_ITEMS_TABLE: &'static str = "ItemsTable";
