fn main() -> anyhow::Result<()> {
    dual_range_ui::init_tracing();
    example::run()
}
