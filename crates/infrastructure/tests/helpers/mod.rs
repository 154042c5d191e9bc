#![allow(dead_code)]

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;

/// In-memory copy of the resolver's record table, lowercase defaults included.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE dns_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL,
            record_type TEXT NOT NULL DEFAULT 'A',
            value TEXT,
            category TEXT NOT NULL DEFAULT 'unknown',
            action TEXT NOT NULL DEFAULT 'forward',
            created_at TEXT DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

pub async fn insert_record(pool: &SqlitePool, domain: &str, category: &str, action: &str) {
    sqlx::query("INSERT INTO dns_records (domain, category, action) VALUES (?, ?, ?)")
        .bind(domain)
        .bind(category)
        .bind(action)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_typed_record(pool: &SqlitePool, domain: &str, record_type: &str, value: &str) {
    sqlx::query("INSERT INTO dns_records (domain, record_type, value) VALUES (?, ?, ?)")
        .bind(domain)
        .bind(record_type)
        .bind(value)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_default_record(pool: &SqlitePool, domain: &str) {
    sqlx::query("INSERT INTO dns_records (domain) VALUES (?)")
        .bind(domain)
        .execute(pool)
        .await
        .unwrap();
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

pub const TFIDF_JSON: &str = r#"{
    "vocabulary": {"slot": 0, "gacor": 1, "berita": 2},
    "idf": [1.0, 1.0, 1.0]
}"#;

pub const NAIVE_BAYES_JSON: &str = r#"{
    "kind": "multinomial_nb",
    "classes": [0, 1],
    "class_log_prior": [-0.6931471805599453, -0.6931471805599453],
    "feature_log_prob": [
        [-2.3025850929940455, -2.3025850929940455, -0.2231435513142097],
        [-0.5108256237659907, -0.5108256237659907, -2.3025850929940455]
    ]
}"#;

pub const TOKENIZER_JSON: &str = r#"{
    "word_index": {"<OOV>": 1, "slot": 2, "gacor": 3, "berita": 4},
    "oov_token": "<OOV>"
}"#;

/// Positive weight on the cell input of ids 2 and 3 ("slot", "gacor").
pub const LSTM_JSON: &str = r#"{
    "embedding": [[0.0], [0.0], [3.0], [3.0], [-3.0]],
    "lstm": {
        "kernel": [[0.0, 0.0, 1.0, 0.0]],
        "recurrent_kernel": [[0.0, 0.0, 0.0, 0.0]],
        "bias": [2.0, 2.0, 0.0, 2.0]
    },
    "dense": {"weights": [8.0], "bias": -1.0},
    "mask_zero": true
}"#;

pub fn write_model_dir(dir: &Path) {
    write_file(dir, "tfidf_vectorizer.json", TFIDF_JSON.as_bytes());
    write_file(dir, "lexical_classifier.json", NAIVE_BAYES_JSON.as_bytes());
    write_file(dir, "sequence_tokenizer.json", TOKENIZER_JSON.as_bytes());
    write_file(dir, "sequence_classifier.json", LSTM_JSON.as_bytes());
}
