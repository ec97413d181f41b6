//! Display strings in the two supported languages

use std::fmt;
use std::str::FromStr;

use crate::error::CardError;
use crate::types::{IdentityField, Orientation, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Name of the language in itself, shown on the switch button
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "zh" | "chinese" | "中文" => Ok(Language::Chinese),
            _ => Err(CardError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Every user-facing string of the editor
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub theme: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub border_width: &'static str,
    pub border_color: &'static str,
    pub background_image: &'static str,
    pub background_image_url: &'static str,
    pub font: &'static str,
    pub show_social: &'static str,
    pub username: &'static str,
    pub upload_background: &'static str,
    pub change_photo: &'static str,
    pub remove_photo: &'static str,
    pub remove_background: &'static str,
    pub edit: &'static str,
    pub switch_layout: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub save_image: &'static str,
    pub saving_image: &'static str,
    pub save_failed: &'static str,
    pub locked_by_theme: &'static str,
    themes: [&'static str; 6],
}

static EN: Strings = Strings {
    title: "Digital Business Card Generator",
    name: "Name",
    position: "Position",
    company: "Company",
    email: "Email",
    phone: "Phone",
    theme: "Theme",
    background_color: "Background Color",
    text_color: "Text Color",
    border_width: "Border Width",
    border_color: "Border Color",
    background_image: "Background Image",
    background_image_url: "Background Image URL",
    font: "Font",
    show_social: "Show Social Media",
    username: "username",
    upload_background: "Upload Background",
    change_photo: "Change photo",
    remove_photo: "Remove photo",
    remove_background: "Remove background image",
    edit: "Edit",
    switch_layout: "Switch Layout",
    horizontal: "Horizontal",
    vertical: "Vertical",
    save_image: "Save Image",
    saving_image: "Saving...",
    save_failed: "Could not save the image",
    locked_by_theme: "Set by the theme (choose Custom to change)",
    themes: ["Modern", "Vintage", "Trendy", "Minimal", "Bold", "Custom"],
};

static ZH: Strings = Strings {
    title: "简单名片",
    name: "姓名",
    position: "职位",
    company: "公司",
    email: "邮箱",
    phone: "电话",
    theme: "主题",
    background_color: "背景颜色",
    text_color: "文字颜色",
    border_width: "边框宽度",
    border_color: "边框颜色",
    background_image: "背景图片",
    background_image_url: "背景图片链接",
    font: "字体",
    show_social: "显示社交媒体",
    username: "用户名",
    upload_background: "上传背景",
    change_photo: "更换图片",
    remove_photo: "删除图片",
    remove_background: "删除背景图片",
    edit: "编辑",
    switch_layout: "切换版式",
    horizontal: "横版",
    vertical: "竖版",
    save_image: "保存图片",
    saving_image: "保存中...",
    save_failed: "图片保存失败",
    locked_by_theme: "由主题决定（选择自定义后可修改）",
    themes: ["现代", "古典", "时尚", "简约", "大胆", "自定义"],
};

/// String table for a language
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::English => &EN,
        Language::Chinese => &ZH,
    }
}

impl Strings {
    pub fn theme_label(&self, theme: Theme) -> &'static str {
        let index = Theme::ALL.iter().position(|t| *t == theme).unwrap_or_default();
        self.themes[index]
    }

    pub fn field_label(&self, field: IdentityField) -> &'static str {
        match field {
            IdentityField::Name => self.name,
            IdentityField::Position => self.position,
            IdentityField::Company => self.company,
            IdentityField::Email => self.email,
            IdentityField::Phone => self.phone,
        }
    }

    /// Label of the orientation button: names the layout it switches to
    pub fn layout_button(&self, current: Orientation) -> String {
        let target = match current {
            Orientation::Landscape => self.vertical,
            Orientation::Portrait => self.horizontal,
        };
        format!("{}: {}", self.switch_layout, target)
    }
}
