use crate::alert::{
    AnimationKind, AnimationSpec, Background, ButtonStyle, ColorFilter, Color, ContentGravity,
    Icon, TextAppearance, Typeface,
};
use crate::Config;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub type Listener = Rc<dyn Fn()>;

pub struct AlertButton {
    pub text: String,
    pub style: ButtonStyle,
    pub on_click: Listener,
}

impl fmt::Debug for AlertButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertButton")
            .field("text", &self.text)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Everything an alert shows and how it behaves. Built up by the fluent
/// [`Alerter`](crate::Alerter) surface, then frozen into an [`Alert`](crate::Alert).
pub struct AlertConfig {
    pub title: Option<String>,
    pub title_typeface: Option<Typeface>,
    pub title_appearance: Option<TextAppearance>,
    pub text: Option<String>,
    pub text_typeface: Option<Typeface>,
    pub text_appearance: Option<TextAppearance>,
    pub content_gravity: ContentGravity,
    pub background: Option<Background>,
    pub icon: Option<Icon>,
    pub icon_filter: Option<ColorFilter>,
    pub show_icon: bool,
    pub icon_pulse: bool,
    pub on_click: Option<Listener>,
    /// Time on screen before the alert hides itself
    pub duration: Duration,
    pub infinite_duration: bool,
    pub on_show: Option<Listener>,
    pub on_hide: Option<Listener>,
    pub swipe_to_dismiss: bool,
    pub vibration: bool,
    pub outside_touch_disabled: bool,
    pub progress: bool,
    pub progress_color: Option<Color>,
    pub dismissible: bool,
    pub enter_animation: AnimationSpec,
    pub exit_animation: AnimationSpec,
    /// In insertion order
    pub buttons: Vec<AlertButton>,
    pub button_typeface: Option<Typeface>,
}

impl AlertConfig {
    /// A fresh draft seeded from the current global [`Config`].
    pub fn from_current_config() -> Self {
        Self {
            title: None,
            title_typeface: None,
            title_appearance: None,
            text: None,
            text_typeface: None,
            text_appearance: None,
            content_gravity: ContentGravity::default(),
            background: None,
            icon: None,
            icon_filter: None,
            show_icon: Config::show_icon(),
            icon_pulse: Config::icon_pulse(),
            on_click: None,
            duration: Config::default_duration(),
            infinite_duration: false,
            on_show: None,
            on_hide: None,
            swipe_to_dismiss: false,
            vibration: Config::vibration(),
            outside_touch_disabled: false,
            progress: false,
            progress_color: None,
            dismissible: Config::dismissible(),
            enter_animation: AnimationSpec {
                kind: AnimationKind::SlideInFromTop,
                duration: Config::enter_animation(),
            },
            exit_animation: AnimationSpec {
                kind: AnimationKind::SlideOutToTop,
                duration: Config::exit_animation(),
            },
            buttons: Vec::new(),
            button_typeface: None,
        }
    }

    pub fn button_labels(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.text.as_str()).collect()
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self::from_current_config()
    }
}

impl fmt::Debug for AlertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertConfig")
            .field("title", &self.title)
            .field("text", &self.text)
            .field("duration", &self.duration)
            .field("infinite_duration", &self.infinite_duration)
            .field("dismissible", &self.dismissible)
            .field("buttons", &self.buttons)
            .finish_non_exhaustive()
    }
}
