use super::*;

#[test]
fn role_endpoint_formats_expected_path() {
    assert_eq!(role_endpoint(4), "/api/roles/4");
}

#[test]
fn role_permissions_endpoint_formats_expected_path() {
    assert_eq!(role_permissions_endpoint(4), "/api/roles/4/permisos");
}

#[test]
fn role_permission_endpoint_formats_expected_path() {
    assert_eq!(role_permission_endpoint(4, 9), "/api/roles/4/permisos/9");
}

#[test]
fn permiso_endpoint_formats_expected_path() {
    assert_eq!(permiso_endpoint(12), "/api/permisos/12");
}

#[test]
fn usuario_endpoint_formats_expected_path() {
    assert_eq!(usuario_endpoint(3), "/api/usuarios/3");
}

#[test]
fn categoria_endpoint_formats_expected_path() {
    assert_eq!(categoria_endpoint(8), "/api/categorias/8");
}
