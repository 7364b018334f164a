use serde::{Deserialize, Serialize};

/// Feishu custom-bot message carrying a rich-text post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeishuMessage {
    pub msg_type: String,
    pub content: FeishuContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeishuContent {
    pub post: FeishuPost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeishuPost {
    pub zh_cn: PostBody,
}

/// Title plus paragraphs; each paragraph is a row of inline elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostBody {
    pub title: String,
    pub content: Vec<Vec<PostElement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum PostElement {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        style: Vec<String>,
    },
    A {
        text: String,
        href: String,
    },
}

impl PostElement {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Vec::new(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: vec!["bold".to_string()],
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::A {
            text: text.into(),
            href: href.into(),
        }
    }
}

impl FeishuMessage {
    pub fn post(title: String, content: Vec<Vec<PostElement>>) -> Self {
        Self {
            msg_type: "post".to_string(),
            content: FeishuContent {
                post: FeishuPost {
                    zh_cn: PostBody { title, content },
                },
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.content.post.zh_cn.title
    }

    pub fn paragraphs(&self) -> &[Vec<PostElement>] {
        &self.content.post.zh_cn.content
    }
}
