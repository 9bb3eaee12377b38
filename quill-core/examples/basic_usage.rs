use quill_core::{executor::sqlite::SqlitePool, QueryBuilder, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let pool = SqlitePool::in_memory().await?;
    let qb = QueryBuilder::new(pool.clone());

    // Ad-hoc schema for the demo; DDL is not part of the builder API
    use quill_core::ConnectionPool;
    pool.execute(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            age INTEGER
        )",
        &[],
    )
    .await?;

    // INSERT returns the store-assigned row id
    let ada = qb
        .insert("users")
        .set("name", "Ada Lovelace")
        .set("email", "ada@example.com")
        .set("age", 36)
        .execute()
        .await?;
    println!("inserted user {}", ada);

    qb.insert("users")
        .values([
            ("name", quill_core::Value::from("Grace Hopper")),
            ("email", "grace@example.com".into()),
            ("age", 45.into()),
        ])
        .execute()
        .await?;

    // SELECT with a raw condition fragment and bound parameters
    let adults = qb
        .select("users")
        .fields(("id", "name", "age"))
        .where_("age >= ?", (40,))
        .order_by("age")
        .fetch()
        .await?;
    for row in &adults {
        println!("{:?}", row.values());
    }

    // fetch_one returns None rather than an error when nothing matches
    let missing = qb
        .select("users")
        .where_("id = ?", (999,))
        .fetch_one()
        .await?;
    println!("user 999: {:?}", missing);

    // UPDATE returns the affected-row count; 0 means "no match"
    let updated = qb
        .update("users")
        .set("age", 37)
        .where_("id = ?", (ada,))
        .execute()
        .await?;
    println!("updated {} row(s)", updated);

    // DELETE with no condition removes every row, by design
    let removed = qb.delete("users").execute().await?;
    println!("removed {} row(s)", removed);

    Ok(())
}
