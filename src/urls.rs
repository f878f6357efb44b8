use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::errors::FavoritesError;
use crate::image::{ImageObject, ResolvedImage, SignedImageObject};
use crate::provider::Provider;
use crate::submission::SubmissionDetail;

/// Which set of URLs to attach to a resolved submission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UrlMode {
    /// Lists of directly served image and thumbnail URLs.
    Direct,

    /// Scalar signed image and thumbnail URLs plus a local URL.
    Signed,
}

impl Default for UrlMode {
    fn default() -> Self {
        UrlMode::Direct
    }
}

impl UrlMode {
    /// Names of the fields this mode adds to a resolved submission.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            UrlMode::Direct => &["urls", "thumbnail_urls"],
            UrlMode::Signed => &["local_url", "url", "thumbnail_url"],
        }
    }
}

impl FromStr for UrlMode {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(UrlMode::Direct),
            "signed" => Ok(UrlMode::Signed),
            _ => Err(FavoritesError::UnknownUrlMode { mode: s.to_owned() }),
        }
    }
}

/// Absolute URL prefixes of one provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProviderUrls {
    pub provider: Provider,
    pub image_url: String,
    pub thumbnail_url: String,
    pub signed_image_url: String,
    pub signed_thumbnail_url: String,
}

/// Convenience wrapper for URL generation functions.
#[derive(Clone, Debug)]
pub struct Urls {
    /// API server address, without trailing slash.
    base: String,

    /// First path segment of the favorites routes.
    pub(crate) favorites_path: String,
}

impl Urls {
    /// Create a new instance, panicking if `base` is not an absolute URL.
    pub fn new(base: impl AsRef<str>, favorites_path: impl Into<String>) -> Self {
        Self::try_new(base.as_ref(), favorites_path)
            .unwrap_or_else(|e| panic!("parse {} as URL: {}", base.as_ref(), e))
    }

    /// Create a new instance. `base` must be an absolute URL; a trailing
    /// slash is dropped. `favorites_path` should *not* include slashes.
    pub fn try_new(base: &str, favorites_path: impl Into<String>) -> Result<Self, FavoritesError> {
        Url::parse(base).map_err(|source| FavoritesError::InvalidBaseUrl {
            base: base.to_owned(),
            source,
        })?;

        Ok(Urls {
            base: base.trim_end_matches('/').to_owned(),
            favorites_path: favorites_path.into(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    // Usernames and file names are used verbatim.
    fn file_url(&self, prefix: &str, submission: &SubmissionDetail) -> String {
        format!(
            "{}{}/{}/{}",
            self.base, prefix, submission.username, submission.file_name
        )
    }

    pub fn image(&self, submission: &SubmissionDetail) -> String {
        self.file_url(submission.provider.config().image_path, submission)
    }

    pub fn thumbnail(&self, submission: &SubmissionDetail) -> String {
        self.file_url(submission.provider.config().thumbnail_path, submission)
    }

    pub fn signed_image(&self, submission: &SubmissionDetail) -> String {
        self.file_url(submission.provider.config().signed_image_path, submission)
    }

    pub fn signed_thumbnail(&self, submission: &SubmissionDetail) -> String {
        self.file_url(submission.provider.config().signed_thumbnail_path, submission)
    }

    /// Attaches the URLs `mode` calls for to `submission`. Unknown
    /// upstream fields named like those URLs are replaced.
    pub fn resolve(&self, mode: UrlMode, mut submission: SubmissionDetail) -> ResolvedImage {
        for key in mode.fields() {
            submission.extra.remove(*key);
        }

        match mode {
            UrlMode::Direct => ResolvedImage::Direct(ImageObject {
                urls: vec![self.image(&submission)],
                thumbnail_urls: vec![self.thumbnail(&submission)],
                submission,
            }),
            UrlMode::Signed => ResolvedImage::Signed(SignedImageObject {
                local_url: self.image(&submission),
                url: self.signed_image(&submission),
                thumbnail_url: self.signed_thumbnail(&submission),
                submission,
            }),
        }
    }

    /// Resolves every submission, keeping their order.
    pub fn resolve_all(
        &self,
        mode: UrlMode,
        submissions: impl IntoIterator<Item = SubmissionDetail>,
    ) -> Vec<ResolvedImage> {
        submissions
            .into_iter()
            .map(|s| self.resolve(mode, s))
            .collect()
    }

    pub fn provider(&self, provider: Provider) -> ProviderUrls {
        let c = provider.config();

        ProviderUrls {
            provider,
            image_url: format!("{}{}", self.base, c.image_path),
            thumbnail_url: format!("{}{}", self.base, c.thumbnail_path),
            signed_image_url: format!("{}{}", self.base, c.signed_image_path),
            signed_thumbnail_url: format!("{}{}", self.base, c.signed_thumbnail_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::submission::tests::submission;

    const BASE: &str = "https://api.example.com";

    fn urls() -> Urls {
        Urls::new(BASE, "favorites")
    }

    #[test]
    fn direct_mode_matches_example() {
        let resolved = urls().resolve(UrlMode::Direct, submission(Provider::Inkbunny, "alice", "pic.jpg"));

        match resolved {
            ResolvedImage::Direct(i) => {
                assert_eq!(i.urls, vec!["https://api.example.com/img/inkbunny/alice/pic.jpg"]);
                assert_eq!(
                    i.thumbnail_urls,
                    vec!["https://api.example.com/img/inkbunny-thumbnails/alice/pic.jpg"]
                );
            }
            other => panic!("expected direct URLs, got {:?}", other),
        }
    }

    #[test]
    fn signed_mode_matches_example() {
        let resolved = urls().resolve(UrlMode::Signed, submission(Provider::Inkbunny, "alice", "pic.jpg"));

        match resolved {
            ResolvedImage::Signed(i) => {
                assert_eq!(i.local_url, "https://api.example.com/img/inkbunny/alice/pic.jpg");
                assert_eq!(
                    i.url,
                    "https://api.example.com/signed-url/hoya-inkbunny-pictures/alice/pic.jpg"
                );
                assert_eq!(
                    i.thumbnail_url,
                    "https://api.example.com/signed-url/hoya-inkbunny-thumbnails/alice/pic.jpg"
                );
            }
            other => panic!("expected signed URLs, got {:?}", other),
        }
    }

    #[test]
    fn resolved_objects_keep_every_field() {
        let mut s = submission(Provider::Furaffinity, "bob", "b.png");
        s.extra.insert("rating".to_owned(), "general".into());
        let value = serde_json::to_value(urls().resolve(UrlMode::Direct, s.clone())).unwrap();
        let original = serde_json::to_value(&s).unwrap();

        for (key, v) in original.as_object().unwrap() {
            assert_eq!(&value[key], v, "{} is passed through", key);
        }
        assert_eq!(value["urls"].as_array().unwrap().len(), 1);
        assert_eq!(value["thumbnail_urls"].as_array().unwrap().len(), 1);
        assert_eq!(value["rating"], "general");

        let value = serde_json::to_value(urls().resolve(UrlMode::Signed, s)).unwrap();
        assert!(value["url"].is_string());
        assert_eq!(value["rating"], "general");
        assert!(value.get("urls").is_none());
    }

    #[test]
    fn resolved_urls_replace_upstream_fields() {
        let mut s = submission(Provider::Inkbunny, "alice", "pic.jpg");
        s.extra.insert("urls".to_owned(), "stale".into());
        s.extra.insert("url".to_owned(), "stale".into());

        let text = serde_json::to_string(&urls().resolve(UrlMode::Direct, s.clone())).unwrap();
        assert_eq!(text.matches("\"urls\":").count(), 1, "{}", text);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["urls"][0], "https://api.example.com/img/inkbunny/alice/pic.jpg");
        assert_eq!(value["url"], "stale");

        let text = serde_json::to_string(&urls().resolve(UrlMode::Signed, s)).unwrap();
        assert_eq!(text.matches("\"url\":").count(), 1, "{}", text);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value["url"],
            "https://api.example.com/signed-url/hoya-inkbunny-pictures/alice/pic.jpg"
        );
        assert_eq!(value["urls"], "stale");
    }

    #[test]
    fn names_are_not_escaped() {
        let s = submission(Provider::Inkbunny, "a b", "ü?.jpg");
        assert_eq!(urls().image(&s), "https://api.example.com/img/inkbunny/a b/ü?.jpg");
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let s = submission(Provider::Inkbunny, "alice", "pic.jpg");
        let with_slash = Urls::new("https://api.example.com/", "favorites");

        assert_eq!(with_slash.image(&s), urls().image(&s));
        assert_eq!(with_slash.base(), BASE);
    }

    #[test]
    fn relative_bases_are_rejected() {
        for base in &["", "/api", "api.example.com"] {
            match Urls::try_new(base, "favorites") {
                Err(FavoritesError::InvalidBaseUrl { base: b, .. }) => assert_eq!(&b, base),
                other => panic!("expected invalid base for {:?}, got {:?}", base, other),
            }
        }
    }

    #[test]
    fn modes_parse() {
        assert_eq!("direct".parse::<UrlMode>().unwrap(), UrlMode::Direct);
        assert_eq!("signed".parse::<UrlMode>().unwrap(), UrlMode::Signed);
        assert!(matches!(
            "Signed".parse::<UrlMode>(),
            Err(FavoritesError::UnknownUrlMode { .. })
        ));
        assert_eq!(UrlMode::default(), UrlMode::Direct);
    }

    #[test]
    fn resolve_all_keeps_order() {
        let names = ["c.jpg", "a.jpg", "b.jpg"];
        let resolved = urls().resolve_all(
            UrlMode::Direct,
            names.iter().map(|n| submission(Provider::Furaffinity, "carol", n)),
        );

        let files: Vec<_> = resolved.iter().map(|r| r.submission().file_name.as_str()).collect();
        assert_eq!(files, names);
    }

    #[test]
    fn provider_prefixes_are_absolute() {
        let p = urls().provider(Provider::Furaffinity);
        assert_eq!(p.image_url, "https://api.example.com/img/furaffinity");
        assert_eq!(
            p.signed_thumbnail_url,
            "https://api.example.com/signed-url/hoya-furaffinity-thumbnails"
        );
    }

    fn any_provider() -> impl Strategy<Value = Provider> {
        prop_oneof![Just(Provider::Inkbunny), Just(Provider::Furaffinity)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000, ..ProptestConfig::default()
        })]

        #[test]
        fn only_own_provider_paths_are_used(provider in any_provider(), username in "[a-zA-Z0-9_]{1,16}", file_name in "[a-z0-9]{1,12}\\.(jpg|png|gif)") {
            let u = urls();
            let s = submission(provider, &username, &file_name);
            let own = provider.config();
            let suffix = format!("/{}/{}", username, file_name);

            let direct = u.resolve(UrlMode::Direct, s.clone());
            let signed = u.resolve(UrlMode::Signed, s.clone());

            if let ResolvedImage::Direct(i) = &direct {
                prop_assert_eq!(i.urls.len(), 1);
                prop_assert_eq!(i.thumbnail_urls.len(), 1);
                prop_assert_eq!(&i.urls[0], &format!("{}{}{}", BASE, own.image_path, suffix));
                prop_assert_eq!(&i.thumbnail_urls[0], &format!("{}{}{}", BASE, own.thumbnail_path, suffix));
            } else {
                prop_assert!(false, "direct mode gave {:?}", direct);
            }

            if let ResolvedImage::Signed(i) = &signed {
                prop_assert_eq!(&i.local_url, &format!("{}{}{}", BASE, own.image_path, suffix));
                prop_assert_eq!(&i.url, &format!("{}{}{}", BASE, own.signed_image_path, suffix));
                prop_assert_eq!(&i.thumbnail_url, &format!("{}{}{}", BASE, own.signed_thumbnail_path, suffix));
                prop_assert!(i.local_url != i.url && i.url != i.thumbnail_url && i.local_url != i.thumbnail_url);
            } else {
                prop_assert!(false, "signed mode gave {:?}", signed);
            }

            for other in Provider::ALL.iter().filter(|p| **p != provider) {
                let c = other.config();
                let json = serde_json::to_string(&(&direct, &signed)).unwrap();
                for path in &[c.image_path, c.thumbnail_path, c.signed_image_path, c.signed_thumbnail_path] {
                    prop_assert!(!json.contains(&format!("{}/", path)), "{} leaks {}", json, path);
                }
            }

            prop_assert_eq!(u.resolve(UrlMode::Direct, s.clone()), direct);
            prop_assert_eq!(u.resolve(UrlMode::Signed, s), signed);
        }
    }
}
