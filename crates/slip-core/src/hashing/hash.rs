//! Fingerprint de imágenes – abstracción para poder cambiar de algoritmo sin
//! tocar el resto del núcleo.
//!
//! El fingerprint es la clave de deduplicación/idempotencia de todo el
//! sistema: mismos bytes, mismo id; bytes distintos, id distinto con
//! probabilidad abrumadora. No se usa para autenticación de contenido, así
//! que basta un hash rápido de propósito general con buena distribución.

use blake3::Hasher;

/// Hashea los bytes crudos de una imagen y devuelve hex de largo fijo.
/// Función pura y determinista.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut h = Hasher::new();
    h.update(bytes);
    h.finalize().to_hex().to_string()
}
