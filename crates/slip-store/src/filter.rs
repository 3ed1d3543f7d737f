use serde_json::Value;

/// Filtro de igualdad sobre campos de un registro JSON. Conjunción: un
/// registro coincide si todos los pares (campo, valor) coinciden. El filtro
/// vacío coincide con todos los registros de la tabla.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega una condición de igualdad (estilo `.eq(campo, valor)`).
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((field.to_string(), value.into()));
        self
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.conditions.iter().all(|(field, expected)| record.get(field) == Some(expected))
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
