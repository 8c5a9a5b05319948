// caja-client/tests/session_storage.rs

use caja_client::{SessionStorage, StoredSession, Usuario};
use tempfile::TempDir;

#[test]
fn test_save_load_delete() {
    let temp_dir = TempDir::new().unwrap();
    // save creates the missing work dir
    let storage = SessionStorage::new(temp_dir.path().join("nested").join("caja"));
    assert!(!storage.exists());
    assert!(storage.load().is_none());

    let usuario = Usuario {
        id: 7,
        nombre: "Luis".into(),
        email: "luis@tienda.pe".into(),
        rol: None,
    };
    storage
        .save(&StoredSession::new("http://localhost:8000", "tok", Some(usuario.clone())))
        .unwrap();
    assert!(storage.exists());

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.token, "tok");
    assert_eq!(loaded.usuario, Some(usuario));
    assert!(loaded.matches("http://localhost:8000/"));
    assert!(!loaded.matches("http://otro:8000"));

    storage.delete().unwrap();
    assert!(!storage.exists());
    // deleting twice is fine
    storage.delete().unwrap();
}

#[test]
fn test_corrupt_file_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SessionStorage::new(temp_dir.path());
    std::fs::write(storage.path(), "{ not json").unwrap();
    assert!(storage.load().is_none());
}
