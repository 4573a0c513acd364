//! Icons for content.
use folio_core::content::Icon as ContentIconKind;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Icon set glyph for a content icon.
pub fn icon_id(icon: ContentIconKind) -> IconId {
    match icon {
        ContentIconKind::Github => IconId::LucideGithub,
        ContentIconKind::Linkedin => IconId::LucideLinkedin,
        ContentIconKind::Twitter => IconId::LucideTwitter,
        ContentIconKind::Facebook => IconId::LucideFacebook,
        ContentIconKind::Mail => IconId::LucideMail,
        ContentIconKind::Phone => IconId::LucidePhone,
        ContentIconKind::Code => IconId::LucideCode,
        ContentIconKind::Zap => IconId::LucideZap,
        ContentIconKind::BookOpen => IconId::LucideBookOpen,
        ContentIconKind::Layers => IconId::LucideLayers,
        ContentIconKind::Database => IconId::LucideDatabase,
        ContentIconKind::Wrench => IconId::LucideWrench,
        ContentIconKind::GraduationCap => IconId::LucideGraduationCap,
        ContentIconKind::Award => IconId::LucideAward,
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentIconProps {
    pub icon: ContentIconKind,

    /// Width and height in pixels.
    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ContentIcon)]
pub fn content_icon(props: &ContentIconProps) -> Html {
    let size = AttrValue::from(props.size.to_string());

    html! {
        <span class={classes!("inline-flex", props.class.clone())}>
            <Icon icon_id={icon_id(props.icon)} width={size.clone()} height={size} />
        </span>
    }
}
