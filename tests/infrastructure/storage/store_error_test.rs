use pagepress::application::ports::ArtifactStoreError;

fn generic(store: &'static str, message: &str) -> object_store::Error {
    object_store::Error::Generic {
        store,
        source: message.to_string().into(),
    }
}

#[test]
fn given_azure_token_failure_when_mapping_then_returns_auth_error() {
    let err = generic(
        "MicrosoftAzure",
        "Error performing token request: connection refused",
    );

    let mapped = ArtifactStoreError::from(err);

    assert!(matches!(mapped, ArtifactStoreError::Auth(_)));
}

#[test]
fn given_unauthenticated_error_when_mapping_then_returns_auth_error() {
    let err = object_store::Error::Unauthenticated {
        path: "documents/out.pdf".to_string(),
        source: "401".to_string().into(),
    };

    assert!(matches!(
        ArtifactStoreError::from(err),
        ArtifactStoreError::Auth(_)
    ));
}

#[test]
fn given_azure_network_failure_when_mapping_then_returns_upload_error() {
    let err = generic("MicrosoftAzure", "connection reset by peer");

    assert!(matches!(
        ArtifactStoreError::from(err),
        ArtifactStoreError::Upload(_)
    ));
}

#[test]
fn given_local_store_failure_mentioning_token_when_mapping_then_returns_upload_error() {
    let err = generic("LocalFileSystem", "unexpected token in path");

    assert!(matches!(
        ArtifactStoreError::from(err),
        ArtifactStoreError::Upload(_)
    ));
}
