pub mod domain_record_repository;

pub use domain_record_repository::SqliteDomainRecordRepository;
