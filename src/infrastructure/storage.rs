// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::utils::errors::ParserError;

/// 本地文件系统存储实现
///
/// 用于保存下载的归档和 CSV 结果文件。目录创建是幂等的，
/// 同名文件直接覆盖。
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn get_full_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// 保存数据，返回写入的完整路径
    pub async fn save(&self, file_name: &str, data: &[u8]) -> Result<PathBuf, ParserError> {
        // 确保目录存在
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ParserError::io(&self.base_path, e))?;

        let full_path = self.get_full_path(file_name);
        let mut file = fs::File::create(&full_path)
            .await
            .map_err(|e| ParserError::io(&full_path, e))?;
        file.write_all(data)
            .await
            .map_err(|e| ParserError::io(&full_path, e))?;
        file.flush()
            .await
            .map_err(|e| ParserError::io(&full_path, e))?;

        Ok(full_path)
    }
}
