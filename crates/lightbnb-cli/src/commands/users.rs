use anyhow::Result;
use lightbnb_storage::NewUser;

use super::Store;
use crate::cli::{AddUserArgs, OutputFormat};
use crate::output::{print_success, print_user};

pub async fn by_email(store: &Store, email: &str, format: OutputFormat) -> Result<()> {
    let user = store.user_with_email(email).await?;
    print_user(user.as_ref(), format)
}

pub async fn by_id(store: &Store, id: i32, format: OutputFormat) -> Result<()> {
    let user = store.user_with_id(id).await?;
    print_user(user.as_ref(), format)
}

pub async fn add(store: &Store, args: &AddUserArgs, format: OutputFormat) -> Result<()> {
    let new_user = NewUser::new(&args.name, &args.email, &args.password);
    let created = store.add_user(&new_user).await?;
    if let Some(ref user) = created
        && format == OutputFormat::Table
    {
        print_success(&format!("Created user {} ({})", user.id, user.email));
    }
    print_user(created.as_ref(), format)
}
