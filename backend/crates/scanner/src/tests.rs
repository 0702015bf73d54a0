//! Unit tests for the scanner crate

#[cfg(test)]
mod fakes {
    use crate::domain::entities::RuleMatch;
    use crate::domain::repository::{RuleCatalog, SignatureEngine, UploadStore};
    use crate::domain::value_objects::UploadName;
    use crate::error::{ScannerError, ScannerResult};
    use crate::infra::temp_store::TempUploadStore;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Engine returning a canned outcome and recording what it saw
    pub struct FakeEngine {
        pub fail_with: Option<String>,
        pub matches: Vec<RuleMatch>,
        /// (rule_file, target, both existed at scan time)
        pub calls: Mutex<Vec<(PathBuf, PathBuf, bool)>>,
    }

    impl FakeEngine {
        pub fn matching(names: &[&str]) -> Self {
            Self {
                fail_with: None,
                matches: names.iter().map(|n| RuleMatch::new(*n)).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                matches: Vec::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(PathBuf, PathBuf, bool)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SignatureEngine for FakeEngine {
        async fn scan_file(
            &self,
            rule_file: &Path,
            target: &Path,
        ) -> ScannerResult<Vec<RuleMatch>> {
            self.calls.lock().unwrap().push((
                rule_file.to_path_buf(),
                target.to_path_buf(),
                target.exists(),
            ));
            match &self.fail_with {
                Some(msg) => Err(ScannerError::Compile(msg.clone())),
                None => Ok(self.matches.clone()),
            }
        }
    }

    pub struct FakeCatalog(pub ScannerResult<Vec<String>>);

    impl RuleCatalog for FakeCatalog {
        async fn list(&self) -> ScannerResult<Vec<String>> {
            match &self.0 {
                Ok(names) => Ok(names.clone()),
                Err(_) => Err(ScannerError::RulesDirectory(std::io::Error::from(
                    std::io::ErrorKind::NotFound,
                ))),
            }
        }
    }

    /// Real temp store that refuses to write target (`.bin`) uploads
    pub struct TargetRejectingStore(pub TempUploadStore);

    impl UploadStore for TargetRejectingStore {
        async fn save(&self, name: &UploadName, bytes: &[u8]) -> ScannerResult<PathBuf> {
            if name.as_str().ends_with(".bin") {
                return Err(ScannerError::Storage(std::io::Error::from(
                    std::io::ErrorKind::StorageFull,
                )));
            }
            self.0.save(name, bytes).await
        }

        async fn remove(&self, path: &Path) -> ScannerResult<()> {
            self.0.remove(path).await
        }
    }

    pub fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }
}

#[cfg(test)]
mod domain_tests {
    use crate::domain::entities::*;
    use crate::domain::value_objects::UploadName;

    #[test]
    fn test_upload_name_keeps_client_name() {
        assert_eq!(UploadName::from_client(Some("sample.exe")).as_str(), "sample.exe");
    }

    #[test]
    fn test_upload_name_strips_directories() {
        assert_eq!(
            UploadName::from_client(Some("../../etc/passwd")).as_str(),
            "passwd"
        );
        assert_eq!(
            UploadName::from_client(Some(r"C:\Users\me\evil.dll")).as_str(),
            "evil.dll"
        );
    }

    #[test]
    fn test_upload_name_falls_back_to_token() {
        for raw in [None, Some(""), Some(".."), Some("dir/")] {
            let name = UploadName::from_client(raw);
            assert_eq!(name.as_str().len(), 32, "raw = {raw:?}");
            assert!(name.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_generated_names_are_unique_with_extension() {
        let a = UploadName::generated(Some("yar"));
        let b = UploadName::generated(Some("yar"));
        assert_ne!(a, b);
        assert!(a.as_str().ends_with(".yar"));
        assert_eq!(a.as_str().len(), 32 + 4);
    }

    #[test]
    fn test_scan_report_summary() {
        let file = UploadedFile::new(Some("hello.txt".into()), b"hello".to_vec());
        let report = ScanReport::new(&file, vec![RuleMatch::new("Hello")]);
        assert_eq!(report.file_name, "hello.txt");
        assert_eq!(report.size, 5);
        assert_eq!(
            report.sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert!(report.has_matches());
        assert_eq!(report.rule_names(), vec!["Hello"]);
    }

    #[test]
    fn test_display_name_for_unnamed_upload() {
        let file = UploadedFile::new(None, Vec::new());
        assert_eq!(file.display_name(), "(unnamed)");
    }
}

#[cfg(test)]
mod infra_tests {
    use crate::domain::repository::{RuleCatalog, UploadStore};
    use crate::domain::value_objects::UploadName;
    use crate::error::ScannerError;
    use crate::infra::rules_dir::{FsRuleCatalog, is_rule_file};
    use crate::infra::temp_store::TempUploadStore;

    #[test]
    fn test_is_rule_file() {
        assert!(is_rule_file("all_rules.yar"));
        assert!(is_rule_file("webshells.yara"));
        assert!(!is_rule_file("notes.txt"));
        assert!(!is_rule_file("yar"));
    }

    #[tokio::test]
    async fn test_catalog_lists_sorted_rule_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.yara", "a.yar", "readme.md", "c.yar.bak"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let names = FsRuleCatalog::new(dir.path()).list().await.unwrap();
        assert_eq!(names, vec!["a.yar".to_string(), "b.yara".to_string()]);
    }

    #[tokio::test]
    async fn test_catalog_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsRuleCatalog::new(dir.path().join("absent"))
            .list()
            .await
            .unwrap_err();
        assert!(matches!(err, ScannerError::RulesDirectory(_)));
    }

    #[tokio::test]
    async fn test_store_save_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempUploadStore::new(dir.path());

        let path = store
            .save(&UploadName::from_client(Some("x.bin")), b"abc")
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("x.bin"));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");

        store.remove(&path).await.unwrap();
        assert!(!path.exists());

        // second removal is a no-op
        store.remove(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempUploadStore::new(dir.path());
        let name = UploadName::from_client(Some("dup.txt"));

        store.save(&name, b"first").await.unwrap();
        let path = store.save(&name, b"second").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_store_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = TempUploadStore::new(dir.path().join("absent"));
        let err = store
            .save(&UploadName::generated(None), b"abc")
            .await
            .unwrap_err();
        assert!(matches!(err, ScannerError::Storage(_)));
    }

    #[tokio::test]
    async fn test_store_failed_cleanup_keeps_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory in the way: both the write and the cleanup fail
        std::fs::create_dir(dir.path().join("taken")).unwrap();
        let store = TempUploadStore::new(dir.path());

        let err = store
            .save(&UploadName::from_client(Some("taken")), b"abc")
            .await
            .unwrap_err();
        assert!(matches!(err, ScannerError::Storage(_)));
        assert!(dir.path().join("taken").is_dir());
    }
}

#[cfg(test)]
mod yara_tests {
    use crate::domain::repository::SignatureEngine;
    use crate::domain::entities::MetaValue;
    use crate::error::ScannerError;
    use crate::infra::yara_engine::YaraEngine;

    const TEST_RULE: &str = r#"
rule TestRule : demo {
    meta:
        description = "Test rule for unit testing"
        severity = 3
    strings:
        $marker = "MALWARE_MARKER"
    condition:
        $marker
}
"#;

    #[tokio::test]
    async fn test_known_pattern_matches() {
        let dir = tempfile::tempdir().unwrap();
        let rule = dir.path().join("test.yar");
        let target = dir.path().join("target.bin");
        std::fs::write(&rule, TEST_RULE).unwrap();
        std::fs::write(&target, b"prefix MALWARE_MARKER suffix").unwrap();

        let matches = YaraEngine::new(10).scan_file(&rule, &target).await.unwrap();
        assert_eq!(matches.len(), 1);

        let m = &matches[0];
        assert_eq!(m.identifier, "TestRule");
        assert_eq!(m.tags, vec!["demo".to_string()]);
        assert!(m.metadata.contains(&("severity".to_string(), MetaValue::Integer(3))));
        assert_eq!(m.strings.len(), 1);
        assert_eq!(m.strings[0].identifier, "$marker");
        assert_eq!(m.strings[0].offset, 7);
        assert_eq!(m.strings[0].length, "MALWARE_MARKER".len());
    }

    #[tokio::test]
    async fn test_clean_file_has_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let rule = dir.path().join("test.yar");
        let target = dir.path().join("clean.bin");
        std::fs::write(&rule, TEST_RULE).unwrap();
        std::fs::write(&target, b"nothing to see").unwrap();

        let matches = YaraEngine::new(10).scan_file(&rule, &target).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_rule_is_compile_error() {
        let dir = tempfile::tempdir().unwrap();
        let rule = dir.path().join("broken.yar");
        let target = dir.path().join("t.bin");
        std::fs::write(&rule, "rule Broken { condition: $undefined }").unwrap();
        std::fs::write(&target, b"x").unwrap();

        let err = YaraEngine::new(10).scan_file(&rule, &target).await.unwrap_err();
        assert!(matches!(err, ScannerError::Compile(_)));
    }

    #[tokio::test]
    async fn test_missing_rule_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("t.bin");
        std::fs::write(&target, b"x").unwrap();

        let result = YaraEngine::new(10)
            .scan_file(&dir.path().join("all_rules.yar"), &target)
            .await;
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::fakes::*;
    use crate::application::check_file::CheckFileUseCase;
    use crate::application::config::ScannerConfig;
    use crate::application::test_rule::{TestRuleInput, TestRuleUseCase};
    use crate::domain::entities::UploadedFile;
    use crate::error::ScannerError;
    use crate::infra::temp_store::TempUploadStore;
    use std::sync::Arc;

    fn config_in(dir: &std::path::Path) -> ScannerConfig {
        ScannerConfig {
            rules_dir: dir.join("rules"),
            upload_dir: dir.to_path_buf(),
            ..ScannerConfig::default()
        }
    }

    fn rule_and_target() -> TestRuleInput {
        TestRuleInput {
            rule_file: UploadedFile::new(Some("r.yar".into()), b"rule R { condition: true }".to_vec()),
            target_file: UploadedFile::new(Some("t.bin".into()), b"payload".to_vec()),
        }
    }

    #[tokio::test]
    async fn test_check_uses_aggregate_rule_and_removes_upload() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Arc::new(FakeEngine::matching(&["Hit"]));
        let config = config_in(dir.path());
        let use_case = CheckFileUseCase::new(
            Arc::new(TempUploadStore::new(dir.path())),
            engine.clone(),
            Arc::new(config.clone()),
        );

        let report = use_case
            .execute(UploadedFile::new(Some("sample.exe".into()), b"MZ".to_vec()))
            .await
            .unwrap();

        assert_eq!(report.rule_names(), vec!["Hit"]);
        let calls = engine.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, config.aggregate_rule_path());
        assert_eq!(calls[0].1, dir.path().join("sample.exe"));
        assert!(calls[0].2, "upload must exist while scanning");
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_check_removes_upload_on_engine_failure() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = CheckFileUseCase::new(
            Arc::new(TempUploadStore::new(dir.path())),
            Arc::new(FakeEngine::failing("could not open file")),
            Arc::new(config_in(dir.path())),
        );

        let err = use_case
            .execute(UploadedFile::new(Some("sample.exe".into()), b"MZ".to_vec()))
            .await
            .unwrap_err();
        assert!(matches!(err, ScannerError::Compile(_)));
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_rule_test_cleans_up_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Arc::new(FakeEngine::matching(&["R"]));
        let use_case =
            TestRuleUseCase::new(Arc::new(TempUploadStore::new(dir.path())), engine.clone());

        let report = use_case.execute(rule_and_target()).await.unwrap();
        assert_eq!(report.file_name, "t.bin");

        let calls = engine.calls();
        assert!(calls[0].0.to_string_lossy().ends_with(".yar"));
        assert!(calls[0].1.to_string_lossy().ends_with(".bin"));
        assert!(calls[0].2);
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_rule_test_cleans_up_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = TestRuleUseCase::new(
            Arc::new(TempUploadStore::new(dir.path())),
            Arc::new(FakeEngine::failing("syntax error")),
        );

        assert!(use_case.execute(rule_and_target()).await.is_err());
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_rule_test_cleans_up_when_target_save_fails() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Arc::new(FakeEngine::matching(&[]));
        let use_case = TestRuleUseCase::new(
            Arc::new(TargetRejectingStore(TempUploadStore::new(dir.path()))),
            engine.clone(),
        );

        let err = use_case.execute(rule_and_target()).await.unwrap_err();
        assert!(matches!(err, ScannerError::Storage(_)));
        assert!(engine.calls().is_empty());
        assert!(dir_is_empty(dir.path()));
    }
}

#[cfg(test)]
mod handler_tests {
    use super::fakes::*;
    use crate::application::config::ScannerConfig;
    use crate::infra::temp_store::TempUploadStore;
    use crate::presentation::router::scanner_router_generic;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    const BOUNDARY: &str = "scanner-test-boundary";

    fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (field, file_name, content) in parts {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn router(dir: &std::path::Path, engine: FakeEngine) -> Router {
        let config = ScannerConfig {
            upload_dir: dir.to_path_buf(),
            ..ScannerConfig::default()
        };
        scanner_router_generic(
            TempUploadStore::new(dir),
            engine,
            FakeCatalog(Ok(vec!["all_rules.yar".into(), "webshell.yara".into()])),
            config,
        )
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_multipart(uri: &str, parts: &[(&str, &str, &[u8])]) -> Request<Body> {
        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_lists_rules() {
        let dir = tempfile::tempdir().unwrap();
        let (status, html) = send(
            router(dir.path(), FakeEngine::matching(&[])),
            Request::get("/yara/").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("all_rules.yar"));
        assert!(html.contains("webshell.yara"));
        assert!(html.contains(r#"action="/yara/check""#));
    }

    #[tokio::test]
    async fn test_dashboard_rules_dir_error_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let router = scanner_router_generic(
            TempUploadStore::new(dir.path()),
            FakeEngine::matching(&[]),
            FakeCatalog(Err(crate::error::ScannerError::Internal("x".into()))),
            ScannerConfig::default(),
        );
        let (status, body) = send(router, Request::get("/yara/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Rules directory unavailable"));
    }

    #[tokio::test]
    async fn test_check_renders_matches() {
        let dir = tempfile::tempdir().unwrap();
        let (status, html) = send(
            router(dir.path(), FakeEngine::matching(&["Suspicious"])),
            post_multipart("/yara/check", &[("file", "a.exe", b"MZ")]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Suspicious"));
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_check_without_matches() {
        let dir = tempfile::tempdir().unwrap();
        let (status, html) = send(
            router(dir.path(), FakeEngine::matching(&[])),
            post_multipart("/yara/check", &[("file", "a.txt", b"clean")]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No matches"));
    }

    #[tokio::test]
    async fn test_check_engine_failure_is_plain_400() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            router(dir.path(), FakeEngine::failing("could not open file")),
            post_multipart("/yara/check", &[("file", "a.exe", b"MZ")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "YARA error: could not open file");
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_check_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            router(dir.path(), FakeEngine::matching(&[])),
            post_multipart("/yara/check", &[("other", "a.exe", b"MZ")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "No file uploaded");
    }

    #[tokio::test]
    async fn test_test_rule_requires_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            router(dir.path(), FakeEngine::matching(&[])),
            post_multipart("/yara/test-rule", &[("rulefile", "r.yar", b"rule R { condition: true }")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Both files must be uploaded.");
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_test_rule_success_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let (status, html) = send(
            router(dir.path(), FakeEngine::matching(&["R"])),
            post_multipart(
                "/yara/test-rule",
                &[
                    ("rulefile", "r.yar", b"rule R { condition: true }"),
                    ("targetfile", "t.bin", b"payload"),
                ],
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("t.bin"));
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_test_rule_failure_prefix_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            router(dir.path(), FakeEngine::failing("syntax error, unexpected end of file")),
            post_multipart(
                "/yara/test-rule",
                &[
                    ("rulefile", "r.yar", b"rule R {"),
                    ("targetfile", "t.bin", b"payload"),
                ],
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Rule test failed: syntax error"));
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_test_rule_form() {
        let dir = tempfile::tempdir().unwrap();
        let (status, html) = send(
            router(dir.path(), FakeEngine::matching(&[])),
            Request::get("/yara/test-rule").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"name="rulefile""#));
        assert!(html.contains(r#"name="targetfile""#));
    }

    #[tokio::test]
    async fn test_non_multipart_body_is_400() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            router(dir.path(), FakeEngine::matching(&[])),
            Request::post("/yara/check")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid upload"));
    }
}

#[cfg(test)]
mod page_tests {
    use crate::domain::entities::*;
    use crate::presentation::pages::*;

    #[test]
    fn test_result_fragment_escapes_file_name() {
        let file = UploadedFile::new(Some("<img src=x>.exe".into()), b"x".to_vec());
        let html = result_fragment(&ScanReport::new(&file, Vec::new()));
        assert!(!html.contains("<img"));
        assert!(html.contains("No matches"));
    }

    #[test]
    fn test_result_fragment_lists_strings_and_meta() {
        let mut m = RuleMatch::new("Eicar");
        m.metadata.push(("author".into(), MetaValue::Text("lab".into())));
        m.strings.push(StringMatch {
            identifier: "$eicar".into(),
            offset: 16,
            length: 68,
        });
        let file = UploadedFile::new(Some("eicar.com".into()), b"x".to_vec());
        let html = result_fragment(&ScanReport::new(&file, vec![m]));
        assert!(html.contains("Eicar"));
        assert!(html.contains("0x10"));
        assert!(html.contains("author"));
    }

    #[test]
    fn test_dashboard_without_rules() {
        assert!(dashboard_page(&[]).contains("No rule files found."));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_route_prefixes() {
        let err = ScannerError::check(ScannerError::Scan("timeout".into()));
        assert_eq!(err.to_string(), "YARA error: timeout");

        let err = ScannerError::test_rule(ScannerError::Compile("bad".into()));
        assert_eq!(err.to_string(), "Rule test failed: bad");
    }

    #[test]
    fn test_all_variants_respond_400() {
        let errors = vec![
            ScannerError::MissingUpload,
            ScannerError::MissingRuleOrTarget,
            ScannerError::Multipart("x".into()),
            ScannerError::Storage(std::io::Error::from(std::io::ErrorKind::Other)),
            ScannerError::Internal("x".into()),
            ScannerError::check(ScannerError::Compile("x".into())),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_kind_passes_through_wrappers() {
        let err = ScannerError::test_rule(ScannerError::Storage(std::io::Error::from(
            std::io::ErrorKind::Other,
        )));
        assert_eq!(err.kind(), ErrorKind::InternalServerError);
        assert_eq!(err.status_code(), 400);
    }
}
