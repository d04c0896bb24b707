//! Static provider and template catalog.
//!
//! Defines the models offered per provider and the fixed system-prompt
//! templates. This is the single source of truth for both the CLI listing
//! commands and the studio's view binder. A [`Catalog`] is built once at
//! startup and only ever read afterwards; the one mutable template (the
//! custom slot) lives in a [`PromptStore`](crate::store::PromptStore).

use anyhow::{anyhow, Result};

use crate::constants::CUSTOM_TEMPLATE;
use crate::provider::ProviderKind;

/// A named, fixed system-prompt template.
pub struct TemplateInfo {
    /// Identifier used in config files and on the command line.
    pub id: &'static str,
    /// The system prompt text sent to the model.
    pub text: &'static str,
}

/// Known OpenAI models.
pub const OPENAI_MODELS: &[&str] = &["gpt-4o", "gpt-4-turbo", "gpt-3.5-turbo"];

/// Known Anthropic models.
pub const ANTHROPIC_MODELS: &[&str] = &[
    "claude-opus-4-20250514",
    "claude-sonnet-4-20250514",
    "claude-3-5-sonnet-20241022",
    "claude-3-5-haiku-20241022",
];

/// Known Google models.
pub const GOOGLE_MODELS: &[&str] = &["gemini-1.5-pro-latest", "gemini-1.5-flash-latest"];

/// Fixed templates, in display order.
pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: "default",
        text: "You are a creative prompt engineer for Midjourney v7. Create unique, detailed, and creative prompts that will generate interesting images. Each prompt should be creative and different from others use these new parameters: - --style raw (for more photographic results) - --personalize (for personalized style) - --stylize [value] (0-1000, default 100) - --chaos [value] (0-100, adds variety) - --weird [value] (0-3000, adds unconventional elements) - --tile (for repeating patterns) - --ar [ratio] (aspect ratios) Create prompts that include: 1. Detailed subject description 2. Style and artistic direction 3. Lighting and mood 4. Technical photography terms 5. Appropriate v7 parameters Make each prompt unique and creative with rich visual details.",
    },
    TemplateInfo {
        id: "artistic",
        text: "You are an artistic prompt engineer specializing in fine art styles for Midjourney v7. artistic prompts that focus on: - Classical art movements (Renaissance, Baroque, Impressionism, etc.) - Contemporary art styles (Abstract, Surrealism, Pop Art, etc.) - Traditional media (Oil painting, Watercolor, Charcoal, etc.) - Artistic techniques and compositions - Color theory and lighting principles Parameters to use: - --style raw or --style artistic - --stylize 150-300 (for enhanced artistic interpretation) - --chaos 20-40 (for artistic variety) - --ar 3:4 or 4:5 (portrait ratios for artwork) Focus on creating museum-quality artistic concepts with rich visual storytelling.",
    },
    TemplateInfo {
        id: "photography",
        text: "You are a photography prompt engineer for Midjourney v7. professional photography prompts focusing on: - Professional photography techniques - Camera settings and lens specifications - Lighting setups (studio, natural, dramatic) - Composition rules and framing - Post-processing styles Technical parameters to include: - --style raw (for photorealistic results) - --ar 16:9, 3:2, or 4:3 (photography ratios) - --stylize 50-150 (for natural look) - Camera specifications (50mm, 85mm, wide-angle, etc.) - Lighting details (golden hour, studio lighting, etc.) Create prompts that would result in portfolio-quality photographs.",
    },
    TemplateInfo {
        id: "fantasy",
        text: "You are a fantasy world prompt engineer for Midjourney v7. Generate exactly 10 fantasy prompts featuring: - Mythical creatures and magical beings - Epic fantasy landscapes and realms - Medieval and magical architecture - Mystical lighting and atmospheric effects - Fantasy character design Creative parameters: - --chaos 30-60 (for fantastical variety) - --weird 500-1500 (for magical elements) - --stylize 200-400 (for enhanced fantasy style) - --ar 16:9 or 2:3 (cinematic or portrait) Focus on creating immersive fantasy worlds with rich lore and magical atmosphere.",
    },
    TemplateInfo {
        id: "whitebackground",
        text: "You are the Photography Tutorials Engineer for Midjourney v7. Professional photography tutorials focused on: - Professional photography techniques. Photos of objects isolated against smooth white backgrounds. Photos for transparent backgrounds. - Camera settings and lens specs. - Lighting settings (studio, natural, dramatic). - Composition and framing rules. - Post-processing styles.  - Camera specs (50mm, 85mm, wide angle, etc.). - Lighting details (golden hour, studio lighting, etc.). Create tutorials that will lead to portfolio-quality photos. Required technical parameters: - --raw style (for realistic results). - --ar 1:1, 3:2, or 4:3 (aspect ratio). - --50-150 style (for natural looking shots) Midjourney v7.",
    },
];

/// Immutable lookup over the provider and template tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Returns the built-in catalog.
    pub fn builtin() -> Self {
        Self
    }

    /// Providers in display order.
    pub fn providers(&self) -> &'static [ProviderKind] {
        ProviderKind::ALL
    }

    /// Models offered for `provider`, in catalog order.
    pub fn models_for(&self, provider: ProviderKind) -> &'static [&'static str] {
        match provider {
            ProviderKind::OpenAI => OPENAI_MODELS,
            ProviderKind::Anthropic => ANTHROPIC_MODELS,
            ProviderKind::Google => GOOGLE_MODELS,
        }
    }

    /// Every selectable template id: the fixed templates, then the custom slot.
    pub fn template_ids(&self) -> Vec<&'static str> {
        TEMPLATES
            .iter()
            .map(|t| t.id)
            .chain(std::iter::once(CUSTOM_TEMPLATE))
            .collect()
    }

    /// Text of a fixed template. `None` for the custom slot or unknown ids.
    pub fn template_text(&self, id: &str) -> Option<&'static str> {
        TEMPLATES.iter().find(|t| t.id == id).map(|t| t.text)
    }

    /// Validates a template name, returning its canonical static id.
    pub fn resolve_template(&self, name: &str) -> Result<&'static str> {
        let name = name.to_lowercase();
        self.template_ids()
            .into_iter()
            .find(|id| *id == name)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown template: {name}. Available: {}",
                    self.template_ids().join(", ")
                )
            })
    }
}

/// Returns true when `id` names the user-editable template slot.
pub fn is_custom(id: &str) -> bool {
    id == CUSTOM_TEMPLATE
}
