//! Status / Importance 列挙型
//!
//! 永続化と表示の両方で使う正規の文字列表現を持つ。解釈は大文字小文字を区別する完全一致。

use crate::error::{model::Result, ModelError};
use std::fmt;
use std::str::FromStr;

/// Todo の状態
///
/// 終端状態は強制しない（任意の状態間を移動できる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Created,
    Done,
    Abandoned,
}

impl Status {
    /// 全ての値（定義順）
    pub const ALL: [Status; 3] = [Status::Created, Status::Done, Status::Abandoned];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Created" => Some(Self::Created),
            "Done" => Some(Self::Done),
            "Abandoned" => Some(Self::Abandoned),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Created => "Created",
            Status::Done => "Done",
            Status::Abandoned => "Abandoned",
        }
    }
}

/// Todo の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    Urgent,
    #[default]
    Medium,
    Secondary,
    Optional,
}

impl Importance {
    /// 全ての値（定義順）
    pub const ALL: [Importance; 4] = [
        Importance::Urgent,
        Importance::Medium,
        Importance::Secondary,
        Importance::Optional,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Urgent" => Some(Self::Urgent),
            "Medium" => Some(Self::Medium),
            "Secondary" => Some(Self::Secondary),
            "Optional" => Some(Self::Optional),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Urgent => "Urgent",
            Importance::Medium => "Medium",
            Importance::Secondary => "Secondary",
            Importance::Optional => "Optional",
        }
    }
}

/// 文字列から状態を解釈
pub fn parse_status(text: &str) -> Result<Status> {
    Status::from_name(text).ok_or_else(|| ModelError::InvalidEnum {
        kind: "status",
        value: text.to_string(),
    })
}

/// 文字列から重要度を解釈
pub fn parse_importance(text: &str) -> Result<Importance> {
    Importance::from_name(text).ok_or_else(|| ModelError::InvalidEnum {
        kind: "importance",
        value: text.to_string(),
    })
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        parse_status(s)
    }
}

impl FromStr for Importance {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        parse_importance(s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
