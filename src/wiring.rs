//! 配線: 標準アダプタでユースケースを組み立てる

use std::sync::Arc;

use crate::adapter::{
    CapturedOutputExpander, HttpQueryBackend, JsonHistoryRepository, ScriptSessionRecorder,
    StdFileSystem, StdProcess, StderrLog,
};
use crate::ports::outbound::{
    ContextExpander, FileSystem, HistoryRepository, Log, Process, QueryBackend, SessionRecorder,
};
use crate::usecase::{QueryUseCase, RecordUseCase};

/// 組み立て済みのユースケース一式
pub struct App {
    pub log: Arc<dyn Log>,
    pub query_use_case: QueryUseCase,
    pub record_use_case: RecordUseCase,
}

/// 標準アダプタで App を組み立てる
pub fn wire_app() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let log: Arc<dyn Log> = Arc::new(StderrLog);
    let process: Arc<dyn Process> = Arc::new(StdProcess);

    let context_expander: Arc<dyn ContextExpander> =
        Arc::new(CapturedOutputExpander::new(Arc::clone(&fs)));
    let history: Arc<dyn HistoryRepository> = Arc::new(JsonHistoryRepository::new(
        Arc::clone(&fs),
        Arc::clone(&log),
    ));
    let backend: Arc<dyn QueryBackend> = Arc::new(HttpQueryBackend::new());
    let recorder: Arc<dyn SessionRecorder> = Arc::new(ScriptSessionRecorder::new(
        Arc::clone(&fs),
        process,
        Arc::clone(&log),
    ));

    App {
        query_use_case: QueryUseCase::new(
            Arc::clone(&fs),
            context_expander,
            history,
            backend,
            Arc::clone(&log),
        ),
        record_use_case: RecordUseCase::new(recorder),
        log,
    }
}
