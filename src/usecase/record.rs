//! キャプチャセッションのユースケース

use crate::config::Settings;
use crate::error::Error;
use crate::ports::outbound::SessionRecorder;
use std::sync::Arc;

/// キャプチャセッションを開始するユースケース
pub struct RecordUseCase {
    recorder: Arc<dyn SessionRecorder>,
}

impl RecordUseCase {
    pub fn new(recorder: Arc<dyn SessionRecorder>) -> Self {
        Self { recorder }
    }

    /// 設定されたキャプチャファイルに向けてセッションを開始する
    pub fn run(&self, settings: &Settings) -> Result<i32, Error> {
        self.recorder.record(&settings.output.file)
    }
}
