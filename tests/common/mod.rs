//! 集成测试公共模块

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 80 个连字符的分隔行
#[allow(dead_code)]
pub const SEP: &str = "--------------------------------------------------------------------------------";

/// 在临时目录下创建测试用的账号导出文件
#[allow(dead_code)]
pub fn create_test_export(
    dir: &TempDir,
    filename: &str,
    content: &str,
) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 标准测试内容：文件头 + 3 个有效块 + 1 个无推荐码的块 + 1 个无邮箱的块
#[allow(dead_code)]
pub fn sample_export() -> String {
    format!(
        "RELATÓRIO DE CÓDIGOS DE REFERÊNCIA
Gerado automaticamente
{SEP}
Data/Hora: 12/03/2025 14:22:10
Código de Referência: ABC123
Email: ana@example.com
Nome: Ana Souza
Senha: s3nh@!
Idade: 27
Gênero: feminino
Código usado no registro: 6247C5
Email verificado: Sim
{SEP}
Data/Hora: 12/03/2025 14:25:41
Código de Referência: DEF456
Email: joao@example.com
Nome: João D'Ávila
Senha: it's-secret
Idade: trinta
Gênero: masculino
Email verificado: Não
{SEP}
Email: orphan@example.com
Nome: Sem Código
{SEP}
Código de Referência: NOEMAIL
Nome: Sem Email
{SEP}
Código de Referência: GHI789
Email: bia@example.com
{SEP}
"
    )
}

/// 生成 `n` 个最简有效块
#[allow(dead_code)]
pub fn numbered_export(n: usize) -> String {
    let mut content = String::new();
    for i in 0..n {
        content.push_str(&format!(
            "Código de Referência: REF{i:03}\nEmail: user{i}@example.com\nNome: User {i}\n{SEP}\n"
        ));
    }
    content
}

/// 验证文件存在且非空
#[allow(dead_code)]
pub fn verify_output_file_exists(path: &Path) -> bool {
    path.exists() && fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}
