//! DOM-backed display surface

use std::collections::HashMap;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAudioElement, HtmlElement};

use crate::catalog::PETAL_GLYPH;
use crate::consts::SHAKE_ANIMATION;
use crate::sizing::ButtonSizes;
use crate::surface::Surface;
use crate::widget::{Petal, PetalId, Screen};

/// Element ids the page must provide
pub mod ids {
    pub const BTN_YES: &str = "btnYes";
    pub const BTN_NO: &str = "btnNo";
    pub const WARNING: &str = "warningMessage";
    pub const HINT: &str = "hint";
    pub const BTN_NEW_MESSAGE: &str = "btnNewMessage";
    pub const BTN_PETALS: &str = "btnRoses";
    pub const MESSAGE: &str = "messageText";
    // Optional
    pub const MUSIC_INTRO: &str = "musicIntro";
    pub const MUSIC_FINAL: &str = "musicFinal";
}

const ACTIVE_CLASS: &str = "active";
const PETALS_ACTIVE_CLASS: &str = "roses-active";
const PETAL_CLASS: &str = "rose";

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("missing element #{0}")]
    MissingElement(&'static str),
}

impl From<SurfaceError> for JsValue {
    fn from(e: SurfaceError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Elements that receive user input
#[derive(Clone)]
pub struct Controls {
    pub yes: HtmlElement,
    pub no: HtmlElement,
    pub new_message: HtmlElement,
    pub petals: HtmlElement,
}

pub struct DomSurface {
    document: Document,
    question_screen: HtmlElement,
    card_screen: HtmlElement,
    controls: Controls,
    warning: HtmlElement,
    hint: HtmlElement,
    message: HtmlElement,
    petals: HashMap<PetalId, HtmlElement>,
    // Acquired for the page's own use; the widget never plays them
    #[allow(dead_code)]
    music_intro: Option<HtmlAudioElement>,
    #[allow(dead_code)]
    music_final: Option<HtmlAudioElement>,
}

fn element(document: &Document, id: &'static str) -> Result<HtmlElement, SurfaceError> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(SurfaceError::MissingElement(id))?;
    log::info!("Bound #{id}");
    Ok(el)
}

fn audio(document: &Document, id: &'static str) -> Option<HtmlAudioElement> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
    if el.is_none() {
        log::warn!("Audio element #{id} not found");
    }
    el
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

impl DomSurface {
    /// Look up every element the widget drives
    pub fn bind(document: &Document) -> Result<Self, SurfaceError> {
        Ok(Self {
            document: document.clone(),
            question_screen: element(document, Screen::Question.element_id())?,
            card_screen: element(document, Screen::Card.element_id())?,
            controls: Controls {
                yes: element(document, ids::BTN_YES)?,
                no: element(document, ids::BTN_NO)?,
                new_message: element(document, ids::BTN_NEW_MESSAGE)?,
                petals: element(document, ids::BTN_PETALS)?,
            },
            warning: element(document, ids::WARNING)?,
            hint: element(document, ids::HINT)?,
            message: element(document, ids::MESSAGE)?,
            petals: HashMap::new(),
            music_intro: audio(document, ids::MUSIC_INTRO),
            music_final: audio(document, ids::MUSIC_FINAL),
        })
    }

    pub fn controls(&self) -> Controls {
        self.controls.clone()
    }

    fn screen_element(&self, screen: Screen) -> &HtmlElement {
        match screen {
            Screen::Question => &self.question_screen,
            Screen::Card => &self.card_screen,
        }
    }

    fn size_button(el: &HtmlElement, size: f64, font_size: f64) {
        set_style(el, "width", &format!("{size}px"));
        set_style(el, "height", &format!("{size}px"));
        set_style(el, "font-size", &format!("{font_size}px"));
    }
}

impl Surface for DomSurface {
    fn show_screen(&mut self, screen: Screen) {
        for s in [Screen::Question, Screen::Card] {
            let el = self.screen_element(s);
            if s == screen {
                set_style(el, "display", "block");
                let _ = el.class_list().add_1(ACTIVE_CLASS);
            } else {
                set_style(el, "display", "none");
                let _ = el.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }

    fn set_no_offset(&mut self, dx: f64, dy: f64) {
        set_style(
            &self.controls.no,
            "transform",
            &format!("translate({dx}px, {dy}px)"),
        );
    }

    fn set_warning(&mut self, text: &str) {
        self.warning.set_text_content(Some(text));
    }

    fn clear_shake(&mut self) {
        set_style(&self.warning, "animation", "none");
    }

    fn apply_shake(&mut self) {
        set_style(&self.warning, "animation", SHAKE_ANIMATION);
    }

    fn set_hint_visible(&mut self, visible: bool) {
        set_style(&self.hint, "display", if visible { "block" } else { "none" });
    }

    fn apply_sizes(&mut self, sizes: &ButtonSizes) {
        Self::size_button(&self.controls.yes, sizes.yes_size, sizes.yes_font_size());
        Self::size_button(&self.controls.no, sizes.no_size, sizes.no_font_size());
        set_style(&self.controls.no, "opacity", &sizes.no_opacity.to_string());
    }

    fn set_message(&mut self, text: &str) {
        self.message.set_text_content(Some(text));
    }

    fn set_petal_control(&mut self, active: bool, label: &str) {
        let btn = &self.controls.petals;
        btn.set_text_content(Some(label));
        let _ = if active {
            btn.class_list().add_1(PETALS_ACTIVE_CLASS)
        } else {
            btn.class_list().remove_1(PETALS_ACTIVE_CLASS)
        };
    }

    fn add_petal(&mut self, petal: &Petal) {
        let Some(el) = self
            .document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("Failed to create petal element");
            return;
        };
        el.set_class_name(PETAL_CLASS);
        el.set_text_content(Some(PETAL_GLYPH));
        set_style(&el, "left", &format!("{}%", petal.left_percent));
        set_style(&el, "top", "-10%");
        set_style(&el, "animation-duration", &format!("{}s", petal.fall_secs));
        let _ = self.card_screen.append_child(&el);
        self.petals.insert(petal.id, el);
    }

    fn remove_petal(&mut self, id: PetalId) {
        if let Some(el) = self.petals.remove(&id) {
            el.remove();
        }
    }
}
