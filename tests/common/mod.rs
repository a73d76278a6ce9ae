pub mod http;

pub mod test_server {
    use std::sync::Once;

    /// Ensures may coroutines are configured only once
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            std::env::set_var("APIREF_STACK_SIZE", "0x8000");
            let config = scalar_api_reference::runtime_config::RuntimeConfig::from_env();
            may::config().set_stack_size(config.stack_size);
        });
    }
}
