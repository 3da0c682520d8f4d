pub mod create_comment_builder;

use anyhow::Result;

#[allow(async_fn_in_trait)]
pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
