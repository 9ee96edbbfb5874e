use crate::auth::AuthOverlay;
use crate::html::{document, html_escape};
use recipe_viewer_core::{Recipe, Resolution, SiteConfig, format_count};

/// Everything a page renderer needs besides the data itself
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub overlay: AuthOverlay<'a>,
    pub is_preview: bool,
}

/// Index page listing every recipe in source order
pub fn render_index(ctx: &RenderContext<'_>, recipes: &[Recipe]) -> String {
    let cards: String = recipes.iter().map(recipe_card).collect();

    let heading = ctx
        .site
        .tagline
        .as_deref()
        .map(html_escape)
        .unwrap_or_else(|| String::from("Delicious Recipes"));

    let body = format!(
        r#"<main class="index">
        <h2 class="section-title">{}</h2>
        <ul class="recipe-grid">
            {}
        </ul>
    </main>"#,
        heading, cards
    );

    document(ctx.site, &ctx.site.title, &body, false, ctx.is_preview, "")
}

fn recipe_card(recipe: &Recipe) -> String {
    let title = html_escape(&recipe.title);
    format!(
        r#"<li class="recipe-card">
                <a href="{}">
                    <img src="{}" alt="{}" width="400" height="250" loading="lazy">
                    <div class="card-body">
                        <h2>{}</h2>
                        <div class="card-meta ingredients">{}</div>
                        <div class="card-meta steps">{}</div>
                        <span class="badge">View Recipe</span>
                    </div>
                </a>
            </li>
            "#,
        html_escape(&recipe.route()),
        html_escape(&recipe.image_src()),
        title,
        title,
        format_count(recipe.ingredient_count(), "ingredients"),
        format_count(recipe.step_count(), "steps"),
    )
}

/// Detail page for a resolved route; `NotFound` renders the not-found state
pub fn render_recipe(ctx: &RenderContext<'_>, resolution: Resolution<'_>) -> String {
    match resolution {
        Resolution::Found(recipe) => render_found(ctx, recipe),
        Resolution::NotFound => render_not_found(ctx),
    }
}

fn render_found(ctx: &RenderContext<'_>, recipe: &Recipe) -> String {
    let title = html_escape(&recipe.title);

    let ingredients: String = recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            format!(
                r#"<li><span class="bullet"></span><span>{}</span></li>
                        "#,
                html_escape(ingredient)
            )
        })
        .collect();

    let steps: String = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            format!(
                r#"<li><span class="step-number">{}</span><span>{}</span></li>
                        "#,
                i + 1,
                html_escape(step)
            )
        })
        .collect();

    let content = format!(
        r#"<article class="recipe">
            <div class="hero">
                <img src="{}" alt="{}">
                <h1>{}</h1>
            </div>
            <div class="recipe-columns">
                <section>
                    <h2>Ingredients</h2>
                    <ul class="ingredients">
                        {}
                    </ul>
                </section>
                <section>
                    <h2>Preparation Steps</h2>
                    <ol class="steps">
                        {}
                    </ol>
                </section>
            </div>
        </article>"#,
        html_escape(&recipe.image_src()),
        title,
        title,
        ingredients,
        steps
    );

    let body = format!(
        r#"<main class="detail">
        <a href="/" class="back-link">&larr; Back to Home</a>
        {}
    </main>"#,
        ctx.overlay.gate(&content)
    );

    let page_title = format!("{} | {}", recipe.title, ctx.site.title);
    document(
        ctx.site,
        &page_title,
        &body,
        true,
        ctx.is_preview,
        &ctx.overlay.script(),
    )
}

/// The not-found state, with a way back to the index
pub fn render_not_found(ctx: &RenderContext<'_>) -> String {
    let body = r#"<main class="not-found">
        <div class="not-found-card">
            <p class="not-found-message">Recipe not found</p>
            <a href="/" class="back-link">Return to home</a>
        </div>
    </main>"#;

    let page_title = format!("Recipe not found | {}", ctx.site.title);
    document(ctx.site, &page_title, body, true, ctx.is_preview, "")
}
