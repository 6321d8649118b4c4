// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use pydocs_parser::application::use_cases::mode::{recover_missing_element, run_mode};
use pydocs_parser::config::settings::Settings;
use pydocs_parser::domain::models::pep_status::ExpectedStatusMap;
use pydocs_parser::engines::cached_engine::CachedSession;
use pydocs_parser::engines::reqwest_engine::ReqwestSession;
use pydocs_parser::infrastructure::cache::response_cache::ResponseCache;
use pydocs_parser::presentation::cli::Cli;
use pydocs_parser::presentation::output::control_output;
use pydocs_parser::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 解析参数、构建会话并执行所选模式
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Parser started");

    let cli = Cli::parse();
    info!(mode = %cli.mode, clear_cache = cli.clear_cache, output = ?cli.output, "Command line arguments");

    // 2. Load configuration
    let settings = Settings::new()?;

    // 3. Build the cached HTTP session
    let session = CachedSession::new(
        ReqwestSession::new(&settings.http)?,
        ResponseCache::new(&settings.storage.cache_dir),
    );
    if cli.clear_cache {
        session.clear().await?;
    }

    // 4. Run the selected mode
    let expected = ExpectedStatusMap::pep_defaults();
    // Other errors are reported once, by anyhow on exit
    let results =
        recover_missing_element(run_mode(cli.mode, &session, &settings, &expected).await)?;

    // 5. Render results
    if let Some(table) = results {
        control_output(&table, cli.output, cli.mode, &settings.storage).await?;
    }

    info!("Parser finished");
    Ok(())
}
