/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5000 (por defecto)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

// Claves de localStorage para la sesión. Una sola convención por despliegue:
// accessToken + refreshToken + user serializado.
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "accessToken";
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refreshToken";
pub const STORAGE_KEY_USER: &str = "user";

/// Endpoint externo para generar imágenes QR (la generación de la imagen
/// no es responsabilidad de esta app)
pub const QR_IMAGE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
