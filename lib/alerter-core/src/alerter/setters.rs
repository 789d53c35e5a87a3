use crate::alert::{
    AlertButton, AlertConfig, Background, Bitmap, BlendMode, ButtonStyle, Color, ColorFilter,
    ContentGravity, Drawable, Icon, Listener, Typeface,
};
use crate::host::{ResourceId, ResourceResolver};
use crate::Alerter;
use log::debug;
use std::rc::Rc;
use std::time::Duration;

impl Alerter {
    /// Resolves `id` against the bound host's resources and applies the result.
    /// A miss leaves the draft untouched.
    fn configure_resolved<T>(
        self,
        kind: &'static str,
        id: ResourceId,
        resolve: impl FnOnce(&dyn ResourceResolver, ResourceId) -> Option<T>,
        apply: impl FnOnce(&mut AlertConfig, T),
    ) -> Self {
        let Some(resources) = self.resources() else {
            return self;
        };
        match resolve(resources, id) {
            Some(value) => self.configure(|config| apply(config, value)),
            None => {
                debug!("No {} resource for {:?}", kind, id);
                self
            }
        }
    }

    pub fn set_title(self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.configure(|config| config.title = Some(title))
    }

    pub fn set_title_res(self, id: ResourceId) -> Self {
        self.configure_resolved("string", id, |r, id| r.string(id), |config, title| {
            config.title = Some(title)
        })
    }

    pub fn set_title_typeface(self, typeface: Typeface) -> Self {
        self.configure(|config| config.title_typeface = Some(typeface))
    }

    pub fn set_title_appearance(self, id: ResourceId) -> Self {
        self.configure_resolved(
            "text appearance",
            id,
            |r, id| r.text_appearance(id),
            |config, appearance| config.title_appearance = Some(appearance),
        )
    }

    pub fn set_content_gravity(self, gravity: ContentGravity) -> Self {
        self.configure(|config| config.content_gravity = gravity)
    }

    pub fn set_text(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.configure(|config| config.text = Some(text))
    }

    pub fn set_text_res(self, id: ResourceId) -> Self {
        self.configure_resolved("string", id, |r, id| r.string(id), |config, text| {
            config.text = Some(text)
        })
    }

    pub fn set_text_typeface(self, typeface: Typeface) -> Self {
        self.configure(|config| config.text_typeface = Some(typeface))
    }

    pub fn set_text_appearance(self, id: ResourceId) -> Self {
        self.configure_resolved(
            "text appearance",
            id,
            |r, id| r.text_appearance(id),
            |config, appearance| config.text_appearance = Some(appearance),
        )
    }

    pub fn set_background_color(self, color: Color) -> Self {
        self.configure(|config| config.background = Some(Background::Color(color)))
    }

    pub fn set_background_color_res(self, id: ResourceId) -> Self {
        self.configure_resolved("color", id, |r, id| r.color(id), |config, color| {
            config.background = Some(Background::Color(color))
        })
    }

    pub fn set_background_drawable(self, drawable: Drawable) -> Self {
        self.configure(|config| config.background = Some(Background::Drawable(drawable)))
    }

    pub fn set_background_res(self, id: ResourceId) -> Self {
        self.configure_resolved("drawable", id, |r, id| r.drawable(id), |config, drawable| {
            config.background = Some(Background::Drawable(drawable))
        })
    }

    pub fn set_icon(self, icon: Icon) -> Self {
        self.configure(|config| config.icon = Some(icon))
    }

    pub fn set_icon_res(self, id: ResourceId) -> Self {
        self.configure_resolved("drawable", id, |r, id| r.drawable(id), |config, drawable| {
            config.icon = Some(Icon::Drawable(drawable))
        })
    }

    pub fn set_icon_bitmap(self, bitmap: Bitmap) -> Self {
        self.set_icon(Icon::Bitmap(bitmap))
    }

    pub fn set_icon_drawable(self, drawable: Drawable) -> Self {
        self.set_icon(Icon::Drawable(drawable))
    }

    /// Tints the icon with `color` using the default blend mode.
    pub fn set_icon_color_filter(self, color: Color) -> Self {
        self.set_icon_tint(color, BlendMode::default())
    }

    pub fn set_icon_tint(self, color: Color, mode: BlendMode) -> Self {
        self.set_icon_filter(ColorFilter::Tint { color, mode })
    }

    pub fn set_icon_filter(self, filter: ColorFilter) -> Self {
        self.configure(|config| config.icon_filter = Some(filter))
    }

    pub fn hide_icon(self) -> Self {
        self.show_icon(false)
    }

    pub fn show_icon(self, show: bool) -> Self {
        self.configure(|config| config.show_icon = show)
    }

    pub fn enable_icon_pulse(self, pulse: bool) -> Self {
        self.configure(|config| config.icon_pulse = pulse)
    }

    pub fn set_on_click_listener(self, listener: impl Fn() + 'static) -> Self {
        let listener: Listener = Rc::new(listener);
        self.configure(|config| config.on_click = Some(listener))
    }

    /// How long the alert stays before hiding itself.
    pub fn set_duration(self, duration: Duration) -> Self {
        self.configure(|config| config.duration = duration)
    }

    pub fn enable_infinite_duration(self, infinite: bool) -> Self {
        self.configure(|config| config.infinite_duration = infinite)
    }

    pub fn set_on_show_listener(self, listener: impl Fn() + 'static) -> Self {
        let listener: Listener = Rc::new(listener);
        self.configure(|config| config.on_show = Some(listener))
    }

    pub fn set_on_hide_listener(self, listener: impl Fn() + 'static) -> Self {
        let listener: Listener = Rc::new(listener);
        self.configure(|config| config.on_hide = Some(listener))
    }

    pub fn enable_swipe_to_dismiss(self) -> Self {
        self.configure(|config| config.swipe_to_dismiss = true)
    }

    pub fn enable_vibration(self, enable: bool) -> Self {
        self.configure(|config| config.vibration = enable)
    }

    /// Makes the alert swallow touches that land outside of it.
    pub fn disable_outside_touch(self) -> Self {
        self.configure(|config| config.outside_touch_disabled = true)
    }

    pub fn enable_progress(self, enable: bool) -> Self {
        self.configure(|config| config.progress = enable)
    }

    pub fn set_progress_color(self, color: Color) -> Self {
        self.configure(|config| config.progress_color = Some(color))
    }

    pub fn set_progress_color_res(self, id: ResourceId) -> Self {
        self.configure_resolved("color", id, |r, id| r.color(id), |config, color| {
            config.progress_color = Some(color)
        })
    }

    pub fn set_dismissible(self, dismissible: bool) -> Self {
        self.configure(|config| config.dismissible = dismissible)
    }

    pub fn set_enter_animation(self, id: ResourceId) -> Self {
        self.configure_resolved("animation", id, |r, id| r.animation(id), |config, animation| {
            config.enter_animation = animation
        })
    }

    pub fn set_exit_animation(self, id: ResourceId) -> Self {
        self.configure_resolved("animation", id, |r, id| r.animation(id), |config, animation| {
            config.exit_animation = animation
        })
    }

    /// Appends a button. Buttons keep the order they were added in.
    pub fn add_button(
        self,
        text: impl Into<String>,
        style: ButtonStyle,
        on_click: impl Fn() + 'static,
    ) -> Self {
        let button = AlertButton {
            text: text.into(),
            style,
            on_click: Rc::new(on_click),
        };
        self.configure(|config| config.buttons.push(button))
    }

    pub fn add_default_button(self, text: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        self.add_button(text, ButtonStyle::default(), on_click)
    }

    pub fn set_button_typeface(self, typeface: Typeface) -> Self {
        self.configure(|config| config.button_typeface = Some(typeface))
    }
}
