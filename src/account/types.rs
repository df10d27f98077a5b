use serde::Serialize;

/// 记录块之间的分隔行：80 个连字符
pub const BLOCK_SEPARATOR: &str = "--------------------------------------------------------------------------------";

/// 块内必须出现的标记，用来判断一个块是否是账号记录
pub const REFERENCE_MARKER: &str = "Código de Referência:";

/// 年龄缺失或无法解析时写入 SQL 的默认值
pub const DEFAULT_AGE: i64 = 18;

/// "Email verificado" 字段的肯定值（不区分大小写）
pub const AFFIRMATIVE_TOKEN: &str = "sim";

/// 字段标签（葡萄牙语，与导出文本保持一致）
pub mod labels {
    pub const DATE: &str = "Data/Hora";
    pub const REFERENCE_CODE: &str = "Código de Referência";
    pub const EMAIL: &str = "Email";
    pub const USERNAME: &str = "Nome";
    pub const PASSWORD: &str = "Senha";
    pub const AGE: &str = "Idade";
    pub const GENDER: &str = "Gênero";
    pub const INVITE_CODE_USED: &str = "Código usado no registro";
    pub const EMAIL_VERIFIED: &str = "Email verificado";
}

/// 单条账号记录，由一个文本块解析得到，创建后不再修改
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// 导出时间（原样保存，不做日期解析）
    pub date: Option<String>,
    /// 推荐码，SQL 中的去重键
    pub reference_code: String,
    /// 邮箱
    pub email: String,
    /// 用户名
    pub username: Option<String>,
    /// 密码（原样保存）
    pub password: Option<String>,
    /// 年龄
    pub age: Option<i64>,
    /// 性别
    pub gender: Option<String>,
    /// 注册时使用的邀请码
    pub invite_code_used: Option<String>,
    /// 邮箱是否已验证
    pub email_verified: bool,
}

impl AccountRecord {
    /// 创建只包含必填字段的记录
    pub fn new<R: Into<String>, E: Into<String>>(
        reference_code: R,
        email: E,
    ) -> Self {
        Self {
            reference_code: reference_code.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// 用于 SQL 的年龄，缺失时取默认值
    pub fn age_or_default(&self) -> i64 {
        self.age.unwrap_or(DEFAULT_AGE)
    }

    /// 预览行：`推荐码: 邮箱 (用户名)`
    pub fn preview_line(&self) -> String {
        format!(
            "{}: {} ({})",
            self.reference_code,
            self.email,
            self.username.as_deref().unwrap_or("-")
        )
    }
}
