//! Stylesheet location detection for common project layouts.

use std::path::Path;

/// Guess where the project's global stylesheet lives.
pub fn possibility_css_path(project_dir: &Path) -> String {
    possibility_css_path_with(project_dir, |path| path.exists())
}

pub(super) fn possibility_css_path_with<FExists>(project_dir: &Path, exists: FExists) -> String
where
    FExists: Fn(&Path) -> bool,
{
    let has = |relative: &str| exists(&project_dir.join(relative));

    // Laravel
    if has("artisan") {
        return "resources/css/app.css".to_string();
    }
    if ["vite.config.ts", "vite.config.js", "vite.config.mjs"]
        .iter()
        .any(|name| has(name))
    {
        return "src/index.css".to_string();
    }
    // Remix
    if has("remix.config.js") || has("app/root.tsx") {
        return "app/tailwind.css".to_string();
    }
    if has("src") {
        return "src/app/globals.css".to_string();
    }
    "app/globals.css".to_string()
}
