// ==========================================
// Calculadora UST - 个人信息领域模型
// ==========================================
// 向导第1步: 填报人身份信息
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// PersonalInfo - 填报人信息
// ==========================================
// 字段约束 (由API层校验): full_name 1..255, email 1..50 且形如邮箱, organization 非空
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,    // 姓名
    pub email: String,        // 邮箱
    pub organization: String, // 所属机构
}

impl PersonalInfo {
    /// 三个字段去除首尾空白后是否均非空
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.organization.trim().is_empty()
    }
}
