use super::Value;
use std::fmt;
use std::sync::Arc;

/// Zero-argument provider for the value a property takes when none is
/// supplied.
///
/// Each call produces a fresh value; providers never hand out shared state.
#[derive(Clone)]
pub struct DefaultValue {
    provider: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl DefaultValue {
    pub fn new<T, F>(provider: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Into<Value>,
    {
        Self {
            provider: Arc::new(move || provider().into()),
        }
    }

    /// Provider for collection-valued relationships.
    pub fn empty_list() -> Self {
        Self::new(|| Value::List(Vec::new()))
    }

    /// Invokes the provider.
    pub fn produce(&self) -> Value {
        (self.provider)()
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultValue(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_call_provider() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let default = DefaultValue::new({
            let calls = calls.clone();
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                "guest"
            }
        });

        assert_eq!(format!("{default:?}"), "DefaultValue(..)");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_list_yields_independent_instances() {
        let default = DefaultValue::empty_list();

        let mut first = default.produce();
        let second = default.produce();

        if let Value::List(items) = &mut first {
            items.push(Value::I64(1));
        }

        assert_eq!(first, Value::List(vec![Value::I64(1)]));
        assert_eq!(second, Value::List(vec![]));
        assert_eq!(default.produce(), Value::List(vec![]));
    }

    #[test]
    fn typed_provider() {
        let default = DefaultValue::new(|| "anonymous");
        assert_eq!(default.produce(), Value::String("anonymous".into()));
    }
}
