use anyhow::Result;

use super::{build_assistant, load_config};
use crate::chat::ChatSession;
use crate::cli::GlobalOptions;

pub async fn run_chat(options: &GlobalOptions) -> Result<()> {
    let config = load_config(options)?;
    let assistant = build_assistant(&config);
    let mut session = ChatSession::new(config, assistant);
    session.run().await
}
