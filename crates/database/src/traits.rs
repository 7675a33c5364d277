/// Schema metadata for PostgreSQL tables.
///
/// Compile-time SQL for table creation and indexing; all methods return
/// `&'static str`, assembled via [`const_format::concatcp!`]. The trait
/// contains no I/O — actual writes go through [`Sink`](crate::Sink).
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}
