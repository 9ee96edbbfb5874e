/// Site stylesheet, written to `/style.css`
pub const STYLESHEET: &str = r#"/* Theme - Warm Kitchen */
:root {
    --amber: #f59e0b;
    --orange: #f97316;
    --orange-dark: #9a3412;
    --orange-soft: #fed7aa;
    --text: #374151;
    --muted: #6b7280;
    --card: #ffffff;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text);
    min-height: 100vh;
    background: linear-gradient(to bottom, #fffbeb, #fff7ed);
}

a { color: inherit; text-decoration: none; }

.site-header {
    background: linear-gradient(to right, var(--amber), var(--orange));
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}

.header-inner {
    max-width: 64rem;
    margin: 0 auto;
    padding: 1.5rem 1rem;
}

.site-header h1 {
    font-size: 1.875rem;
    font-weight: 700;
    color: white;
}

.preview-badge {
    background: var(--orange-dark);
    color: white;
    padding: 0.5rem 1rem;
    text-align: center;
    font-weight: bold;
}

main {
    max-width: 64rem;
    margin: 0 auto;
    padding: 3rem 1rem;
}

.section-title {
    font-size: 1.5rem;
    color: var(--orange-dark);
    margin-bottom: 2rem;
    padding-bottom: 0.5rem;
    border-bottom: 1px solid var(--orange-soft);
    display: inline-block;
}

.recipe-grid {
    list-style: none;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 2rem;
}

.recipe-card {
    background: var(--card);
    border-radius: 0.75rem;
    overflow: hidden;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    transition: transform 0.3s, box-shadow 0.3s;
}

.recipe-card:hover {
    transform: translateY(-4px);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
}

.recipe-card img {
    width: 100%;
    height: 13rem;
    object-fit: cover;
}

.card-body { padding: 1.25rem; }

.card-body h2 {
    font-size: 1.25rem;
    color: #1f2937;
}

.card-meta {
    margin-top: 0.25rem;
    font-size: 0.875rem;
    color: var(--muted);
}

.badge {
    display: inline-block;
    margin-top: 1rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    background: #ffedd5;
    color: var(--orange-dark);
}

.back-link {
    display: inline-block;
    margin-bottom: 2rem;
    color: #ea580c;
    font-weight: 500;
}

.back-link:hover { color: var(--orange-dark); }

.recipe {
    background: var(--card);
    border-radius: 0.75rem;
    overflow: hidden;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.hero { position: relative; height: 24rem; }

.hero img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.hero h1 {
    position: absolute;
    left: 1.5rem;
    right: 1.5rem;
    bottom: 1.5rem;
    font-size: 2.25rem;
    color: white;
    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.6);
}

.recipe-columns {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    padding: 2rem;
}

.recipe-columns h2 {
    font-size: 1.5rem;
    color: var(--orange-dark);
    margin-bottom: 1.5rem;
    padding-bottom: 0.5rem;
    border-bottom: 1px solid var(--orange-soft);
}

.ingredients, .steps { list-style: none; }

.ingredients li, .steps li {
    display: flex;
    align-items: flex-start;
    margin-bottom: 0.75rem;
}

.bullet {
    width: 1.25rem;
    height: 1.25rem;
    margin: 0.25rem 0.75rem 0 0;
    border-radius: 50%;
    background: var(--orange-soft);
    flex-shrink: 0;
}

.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 1.75rem;
    height: 1.75rem;
    margin-right: 0.75rem;
    border-radius: 50%;
    background: var(--orange-soft);
    color: var(--orange-dark);
    font-size: 0.875rem;
    flex-shrink: 0;
}

.not-found, .sign-in-prompt {
    display: flex;
    flex-direction: column;
    align-items: center;
}

.not-found-card, .sign-in-prompt {
    background: var(--card);
    padding: 2rem;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.not-found-message {
    font-size: 1.5rem;
    color: var(--orange-dark);
    margin-bottom: 1rem;
}

.button {
    display: inline-block;
    margin-top: 1rem;
    padding: 0.5rem 1.25rem;
    border-radius: 0.375rem;
    background: var(--orange);
    color: white;
}

.site-footer {
    padding: 2rem 1rem;
    text-align: center;
    color: #c2410c;
}

@media (max-width: 768px) {
    .recipe-columns { grid-template-columns: 1fr; }
    .hero { height: 16rem; }
}
"#;
