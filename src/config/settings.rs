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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const PEP_DOC_URL: &str = "https://peps.python.org/";

/// 应用程序配置设置
///
/// 包含数据源、HTTP客户端和本地存储等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据源配置
    pub sources: SourceSettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
    /// 存储配置
    pub storage: StorageSettings,
}

/// 数据源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    /// 文档根URL
    pub main_doc_url: String,
    /// PEP 索引URL
    pub pep_doc_url: String,
    /// “What's New” 页面相对路径
    pub whats_new_path: String,
    /// 下载页面相对路径
    pub download_path: String,
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 归档下载目录
    pub downloads_dir: String,
    /// CSV 结果目录
    pub results_dir: String,
    /// 响应缓存目录
    pub cache_dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 和 `PYDOCS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PYDOCS").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 仅包含默认值的配置，不读取文件和环境变量
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("sources.main_doc_url", MAIN_DOC_URL)?
            .set_default("sources.pep_doc_url", PEP_DOC_URL)?
            .set_default("sources.whats_new_path", "whatsnew/")?
            .set_default("sources.download_path", "download.html")?
            .set_default(
                "http.user_agent",
                concat!("pydocs-parser/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("http.timeout_secs", 30)?
            .set_default("storage.downloads_dir", "downloads")?
            .set_default("storage.results_dir", "results")?
            .set_default("storage.cache_dir", ".cache/http")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
