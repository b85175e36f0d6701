//! Path addressing for the three views.
//!
//! ```text
//! {base}/                routine list
//! {base}/{id}/edit       routine editor
//! {base}/{id}/play       playback
//! ```

use hiit_core::config::normalize_base_path;
use hiit_domain::RoutineId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    RoutineList,
    EditRoutine(RoutineId),
    PlayRoutine(RoutineId),
    /// Carries the path as it was given.
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str, base_path: &str) -> Self {
        let base = normalize_base_path(base_path);
        let trimmed = path.trim();

        let Some(rest) = strip_base(trimmed, &base) else {
            return Route::NotFound(trimmed.to_string());
        };

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::RoutineList,
            [id, "edit"] => Route::EditRoutine(id.to_string()),
            [id, "play"] => Route::PlayRoutine(id.to_string()),
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn href(&self, base_path: &str) -> String {
        let base = normalize_base_path(base_path);
        match self {
            Route::RoutineList => format!("{}/", base),
            Route::EditRoutine(id) => format!("{}/{}/edit", base, id),
            Route::PlayRoutine(id) => format!("{}/{}/play", base, id),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn routine_id(&self) -> Option<&str> {
        match self {
            Route::EditRoutine(id) | Route::PlayRoutine(id) => Some(id),
            Route::RoutineList | Route::NotFound(_) => None,
        }
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_base() {
        assert_eq!(Route::parse("/", ""), Route::RoutineList);
        assert_eq!(Route::parse("", ""), Route::RoutineList);
        assert_eq!(
            Route::parse("/abc/edit", ""),
            Route::EditRoutine("abc".to_string())
        );
        assert_eq!(
            Route::parse("/abc/play/", ""),
            Route::PlayRoutine("abc".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        for path in ["/abc", "/abc/delete", "/abc/edit/extra", "/a/b/c/d"] {
            assert_eq!(Route::parse(path, ""), Route::NotFound(path.to_string()));
        }
    }

    #[test]
    fn test_parse_with_base() {
        assert_eq!(Route::parse("/hiit", "/hiit/"), Route::RoutineList);
        assert_eq!(Route::parse("/hiit/", "hiit"), Route::RoutineList);
        assert_eq!(
            Route::parse("/hiit/x1/play", "/hiit"),
            Route::PlayRoutine("x1".to_string())
        );
        assert_eq!(
            Route::parse("/x1/play", "/hiit"),
            Route::NotFound("/x1/play".to_string())
        );
        assert_eq!(
            Route::parse("/hiitx/x1/play", "/hiit"),
            Route::NotFound("/hiitx/x1/play".to_string())
        );
    }

    #[test]
    fn test_href() {
        let edit = Route::EditRoutine("r1".to_string());
        assert_eq!(edit.href(""), "/r1/edit");
        assert_eq!(edit.href("/app/"), "/app/r1/edit");
        assert_eq!(Route::RoutineList.href(""), "/");
        assert_eq!(Route::RoutineList.href("app"), "/app/");
    }

    #[test]
    fn test_href_parse_round_trip() {
        let routes = [
            Route::RoutineList,
            Route::EditRoutine("8f14e45f-ceea-467a-9af0-1f4b0c3a2d11".to_string()),
            Route::PlayRoutine("k3j9x".to_string()),
        ];
        for base in ["", "/hiit", "/deep/nested/base/"] {
            for route in &routes {
                assert_eq!(&Route::parse(&route.href(base), base), route, "base {:?}", base);
            }
        }
    }
}
