use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    mono_font::{ascii::FONT_5X7, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
    Drawable,
};

#[cfg(feature = "logging")]
use defmt::trace;

use crate::geometry::GEOMETRY;
use crate::DisplayState;

const MARQUEE_FONT: MonoFont<'static> = FONT_5X7;

const EYE_SIZE: u32 = 8;
const PUPIL_SIZE: u32 = 2;
// How far the pupil can move from the eye centre and stay inside the outline.
pub const MAX_PUPIL_SHIFT: i32 = 2;

pub trait Renderer {
    fn draw<D: DrawTarget<Color = BinaryColor>>(
        &self,
        target: &mut D,
        state: &DisplayState,
    ) -> Result<(), D::Error>;
}

/// Draws the marquee text with its top-left corner at the cursor.
pub struct MarqueeRenderer;

impl MarqueeRenderer {
    /// Width in pixels the text occupies, used to know when it has scrolled
    /// off the panel.
    pub fn text_width(text: &str) -> i32 {
        let advance = MARQUEE_FONT.character_size.width + MARQUEE_FONT.character_spacing;
        (text.chars().count() as u32 * advance) as i32
    }
}

impl Renderer for MarqueeRenderer {
    fn draw<D>(&self, target: &mut D, state: &DisplayState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let style = MonoTextStyle::new(&MARQUEE_FONT, BinaryColor::On);
        let origin = Point::new(state.cursor.x, state.cursor.y);
        Text::with_baseline(state.marquee.as_str(), origin, style, Baseline::Top).draw(target)?;
        Ok(())
    }
}

/// Two eyes, one centred in each half of the panel, looking left or right
/// according to the animation movement.
pub struct EyesRenderer;

impl EyesRenderer {
    fn pupil_offset(movement: i32) -> i32 {
        movement.clamp(-MAX_PUPIL_SHIFT, MAX_PUPIL_SHIFT)
    }
}

impl Renderer for EyesRenderer {
    fn draw<D>(&self, target: &mut D, state: &DisplayState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let half = GEOMETRY.columns() as i32 / 2;
        let eye_left = (half - EYE_SIZE as i32) / 2;
        let shift = Self::pupil_offset(state.animation.movement());

        for eye in 0..2 {
            let top_left = Point::new(eye * half + eye_left, 0);
            Rectangle::new(top_left, Size::new(EYE_SIZE, EYE_SIZE))
                .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
                .draw(target)?;

            let centre = (EYE_SIZE - PUPIL_SIZE) as i32 / 2;
            let pupil = top_left + Point::new(centre + shift, centre);
            Rectangle::new(pupil, Size::new(PUPIL_SIZE, PUPIL_SIZE))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target)?;
        }
        Ok(())
    }
}

/// Clears `target` and draws whatever the state calls for: the eyes while an
/// animation runs, the marquee otherwise.
pub fn render_state<D>(target: &mut D, state: &DisplayState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    if state.animation.is_active() {
        #[cfg(feature = "logging")]
        trace!("render eyes, movement {}", state.animation.movement());
        EyesRenderer.draw(target, state)
    } else {
        MarqueeRenderer.draw(target, state)
    }
}
