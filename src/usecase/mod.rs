//! ユースケース（アダプター経由で I/O を行うオーケストレーション）

pub mod query;
pub mod record;

pub use query::QueryUseCase;
pub use record::RecordUseCase;
