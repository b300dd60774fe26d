use web_sys::File;

#[derive(Clone)]
pub enum Msg {
    SetAuthorizedToEdit(bool),
    SetUploadUrl(String),
    SetDirectoryPath(String),
    SetTransactionFieldName(String),
    SetTransactionId(i64),
    Dropped(Vec<File>),
    DoubleClicked,
    FilesChosen(Vec<File>),
    UploadFinished(Result<String, String>),
    SetFileName(Option<String>),
}
