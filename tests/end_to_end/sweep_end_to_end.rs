use async_trait::async_trait;
use judol_filter_application::ports::{AuditLog, PageFetcher};
use judol_filter_application::services::{EnsembleEngine, NormalizationPipeline};
use judol_filter_application::use_cases::RunSweepUseCase;
use judol_filter_domain::config::{DatabaseConfig, EnsembleConfig, ModelsConfig, ResourcesConfig};
use judol_filter_domain::DomainError;
use judol_filter_infrastructure::audit::JsonFileAuditLog;
use judol_filter_infrastructure::database::create_pool;
use judol_filter_infrastructure::models::load_models;
use judol_filter_infrastructure::repositories::SqliteDomainRecordRepository;
use judol_filter_infrastructure::resources::load_normalization_resources;
use judol_filter_infrastructure::scraper::HtmlContentExtractor;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const TFIDF_JSON: &str = r#"{
    "vocabulary": {"slot": 0, "gacor": 1, "berita": 2},
    "idf": [1.0, 1.0, 1.0]
}"#;

const NAIVE_BAYES_JSON: &str = r#"{
    "kind": "multinomial_nb",
    "classes": [0, 1],
    "class_log_prior": [-0.6931471805599453, -0.6931471805599453],
    "feature_log_prob": [
        [-2.3025850929940455, -2.3025850929940455, -0.2231435513142097],
        [-0.5108256237659907, -0.5108256237659907, -2.3025850929940455]
    ]
}"#;

const TOKENIZER_JSON: &str = r#"{
    "word_index": {"<OOV>": 1, "slot": 2, "gacor": 3, "berita": 4},
    "oov_token": "<OOV>"
}"#;

const LSTM_JSON: &str = r#"{
    "embedding": [[0.0], [0.0], [3.0], [3.0], [-3.0]],
    "lstm": {
        "kernel": [[0.0, 0.0, 1.0, 0.0]],
        "recurrent_kernel": [[0.0, 0.0, 0.0, 0.0]],
        "bias": [2.0, 2.0, 0.0, 2.0]
    },
    "dense": {"weights": [8.0], "bias": -1.0},
    "mask_zero": true
}"#;

/// Serves canned HTML per domain; unknown domains render as an empty page.
struct CannedPages(HashMap<String, String>);

#[async_trait]
impl PageFetcher for CannedPages {
    async fn fetch(&self, domain: &str) -> Result<String, DomainError> {
        Ok(self.0.get(domain).cloned().unwrap_or_default())
    }
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

/// Creates the resolver-owned store the classifier expects to find.
async fn seed_store(path: &str, rows: &[(&str, &str, &str)]) {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();

    sqlx::query(
        "CREATE TABLE dns_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'unknown',
            action TEXT NOT NULL DEFAULT 'forward',
            updated_at TEXT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    for (domain, category, action) in rows {
        sqlx::query("INSERT INTO dns_records (domain, category, action) VALUES (?, ?, ?)")
            .bind(domain)
            .bind(category)
            .bind(action)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool.close().await;
}

async fn record(pool: &SqlitePool, domain: &str) -> (String, String) {
    sqlx::query_as("SELECT category, action FROM dns_records WHERE domain = ?")
        .bind(domain)
        .fetch_one(pool)
        .await
        .unwrap()
}

struct World {
    _dir: tempfile::TempDir,
    pool: SqlitePool,
    audit: Arc<JsonFileAuditLog>,
    sweep: RunSweepUseCase,
}

async fn build_world(rows: &[(&str, &str, &str)], pages: &[(&str, &str)]) -> World {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let models_dir = root.join("models");
    std::fs::create_dir(&models_dir).unwrap();
    write(&models_dir, "tfidf_vectorizer.json", TFIDF_JSON);
    write(&models_dir, "lexical_classifier.json", NAIVE_BAYES_JSON);
    write(&models_dir, "sequence_tokenizer.json", TOKENIZER_JSON);
    write(&models_dir, "sequence_classifier.json", LSTM_JSON);

    let resources = load_normalization_resources(&ResourcesConfig {
        dictionary_path: write(root, "kamus.csv", "gk,tidak\nbgt,banget\n"),
        stopwords_path: write(root, "stopwords.txt", "website\n"),
        base_stopwords_path: None,
        root_words_path: Some(write(root, "kata_dasar.txt", "berita\nbaru\nhari\n")),
    })
    .unwrap();
    let pipeline = Arc::new(NormalizationPipeline::new(
        Arc::new(resources.resources),
        Arc::new(resources.stemmer),
    ));

    let models = load_models(&ModelsConfig {
        dir: models_dir.display().to_string(),
        ..ModelsConfig::default()
    })
    .unwrap();
    let engine = Arc::new(EnsembleEngine::new(
        models.vectorizer,
        models.lexical,
        models.tokenizer,
        models.sequence,
        EnsembleConfig::default(),
    ));

    let db_path = root.join("dns_records.db").display().to_string();
    seed_store(&db_path, rows).await;
    let pool = create_pool(&DatabaseConfig {
        path: db_path,
        ..DatabaseConfig::default()
    })
    .await
    .unwrap();

    let audit = Arc::new(JsonFileAuditLog::new(root.join("ml_analyzer_log.json")));
    let fetcher = CannedPages(
        pages
            .iter()
            .map(|(d, html)| (d.to_string(), html.to_string()))
            .collect(),
    );

    let sweep = RunSweepUseCase::new(
        Arc::new(SqliteDomainRecordRepository::new(pool.clone())),
        Arc::new(fetcher),
        Arc::new(HtmlContentExtractor::new()),
        pipeline,
        engine,
        audit.clone(),
    );

    World {
        _dir: dir,
        pool,
        audit,
        sweep,
    }
}

#[tokio::test]
async fn test_full_sweep_over_sqlite_store() {
    let world = build_world(
        &[
            ("slot88.example.", "Unknown", "Forward"),
            ("news.example.", "unknown", "forward"),
            ("dead.example.", "Unknown", "Forward"),
            ("already.example.", "Blacklist", "Block"),
        ],
        &[
            (
                "slot88.example",
                "<html><body><h1>Slot gacor bgt!</h1><script>x()</script><p>Slot gacor</p></body></html>",
            ),
            (
                "news.example",
                "<html><body><article><p>Berita terbaru hari ini</p></article></body></html>",
            ),
        ],
    )
    .await;

    let report = world.sweep.execute(&CancellationToken::new()).await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.blocked, 1);
    assert_eq!(report.allowed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.persist_failures, 0);

    assert_eq!(
        record(&world.pool, "slot88.example.").await,
        ("Blacklist".to_string(), "Block".to_string())
    );
    assert_eq!(
        record(&world.pool, "news.example.").await,
        ("Whitelist".to_string(), "Allow".to_string())
    );
    assert_eq!(
        record(&world.pool, "dead.example.").await,
        ("Unknown".to_string(), "Forward".to_string())
    );
    assert_eq!(
        record(&world.pool, "already.example.").await,
        ("Blacklist".to_string(), "Block".to_string())
    );

    let entries = world.audit.entries().await.unwrap();
    assert_eq!(entries.len(), 3);
    let status_of = |domain: &str| {
        entries
            .iter()
            .find(|e| e.domain == domain)
            .map(|e| e.status.clone())
            .unwrap()
    };
    assert!(status_of("slot88.example").starts_with("BLOCKED (ML Detected "));
    assert!(status_of("news.example").starts_with("ALLOWED (Safe "));
    assert_eq!(status_of("dead.example"), "SKIPPED (Empty content)");
}

#[tokio::test]
async fn test_second_sweep_only_revisits_skipped_domains() {
    let world = build_world(
        &[
            ("slot88.example.", "Unknown", "Forward"),
            ("dead.example.", "Unknown", "Forward"),
        ],
        &[("slot88.example", "<body>slot gacor slot gacor</body>")],
    )
    .await;

    world.sweep.execute(&CancellationToken::new()).await.unwrap();
    let second = world.sweep.execute(&CancellationToken::new()).await.unwrap();

    assert_eq!(second.total, 1);
    assert_eq!(second.skipped, 1);
    assert_eq!(world.audit.entries().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_store_without_unknown_domains_writes_nothing() {
    let world = build_world(&[("news.example.", "Whitelist", "Allow")], &[]).await;

    let report = world.sweep.execute(&CancellationToken::new()).await.unwrap();

    assert_eq!(report.total, 0);
    assert!(world.audit.entries().await.unwrap().is_empty());
    assert!(!world.audit.path().exists());
}

#[tokio::test]
async fn test_missing_store_file_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");

    let result = create_pool(&DatabaseConfig {
        path: path.display().to_string(),
        ..DatabaseConfig::default()
    })
    .await;

    assert!(result.is_err());
    assert!(!path.exists());
}
